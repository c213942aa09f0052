use serde::{Deserialize, Serialize};

/// Three-component vector used for attachment spacing and unit loads.
///
/// For spacing, `x` is horizontal along the line, `y` transverse and `z`
/// vertical.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_of_3_4_0() {
        assert_eq!(Vector3d::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vector3d::zeros().magnitude(), 0.0);
    }
}
