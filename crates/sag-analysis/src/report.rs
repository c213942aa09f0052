use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::job::RunId;
use crate::store::{ResultSet, StretchSample};

/// JSON snapshot of a completed run for report builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub created_at: DateTime<Utc>,
    pub run_id: RunId,
    pub span: String,
    pub backend: String,
    /// Weathercase descriptions, in result-vector order.
    pub weathercases: Vec<String>,
    pub job_count: usize,
    pub failure_count: usize,
    pub errors: Vec<String>,
    pub results: ResultSet,
    pub stretch: StretchSample,
}

pub fn write_report(path: &Path, report: &AnalysisReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("serializing analysis report to JSON")?;
    fs::write(path, json).with_context(|| format!("writing analysis report '{}'", path.display()))?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<AnalysisReport> {
    let file = fs::File::open(path)
        .with_context(|| format!("opening analysis report '{}'", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("parsing analysis report '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn report_writes_and_reads_back() {
        let report = AnalysisReport {
            created_at: Utc::now(),
            run_id: RunId::new(),
            span: "Span 1".into(),
            backend: "stub".into(),
            weathercases: vec!["Case 0".into()],
            job_count: 3,
            failure_count: 1,
            errors: vec!["No solution for Case 0 Load.".into()],
            results: ResultSet::sentinels(1),
            stretch: StretchSample::default(),
        };
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        write_report(&path, &report).unwrap();

        let parsed = load_report(&path).unwrap();
        assert_eq!(parsed.run_id, report.run_id);
        assert_eq!(parsed.errors, report.errors);
        assert_eq!(parsed.results.len(), 1);
    }

    #[test]
    fn report_preserves_float_bits() {
        let mut results = ResultSet::sentinels(1);
        results.load[0].tension_horizontal.shell = 3919.9999999999995;
        results.load[0].length_unloaded = 1200.0000000000002;
        results.load[0].weight_unit.z = 0.1 + 0.2;
        let report = AnalysisReport {
            created_at: Utc::now(),
            run_id: RunId::new(),
            span: "Span 1".into(),
            backend: "stub".into(),
            weathercases: vec!["Case 0".into()],
            job_count: 3,
            failure_count: 3,
            errors: Vec::new(),
            results,
            stretch: StretchSample::default(),
        };
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_report(&path, &report).unwrap();

        let parsed = load_report(&path).unwrap();
        assert_eq!(parsed.results, report.results);
    }

    #[test]
    fn missing_report_has_context() {
        let dir = tempdir().unwrap();
        let err = load_report(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("opening analysis report"));
    }
}
