use serde::{Deserialize, Serialize};

/// Cable stretch-history category a result is computed for.
///
/// `Null` never comes out of a successful solve; it tags sentinel results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Long-term creep stretch applied.
    Creep,
    /// As-strung, no permanent stretch.
    Initial,
    /// Stretch from the heaviest design load applied.
    Load,
    /// No valid result.
    Null,
}

impl Condition {
    /// Conditions that are analyzed for every weathercase, in job order.
    pub const ANALYZED: [Condition; 3] = [Condition::Creep, Condition::Initial, Condition::Load];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Creep => "Creep",
            Condition::Initial => "Initial",
            Condition::Load => "Load",
            Condition::Null => "Null",
        }
    }

    /// True for the sentinel tag.
    pub fn is_null(&self) -> bool {
        matches!(self, Condition::Null)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
