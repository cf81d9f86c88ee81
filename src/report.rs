//! Rendering and audit logging for validation results.
//!
//! Two consumers: humans get a formatted text report grouping each
//! diagnostic with its cause and numbered fixes; tooling gets append-only
//! NDJSON records (one JSON object per line) with an RFC3339 timestamp, so
//! successive validation runs accumulate into one auditable log. The
//! validation engine itself never writes files; emitting a report is a
//! deliberate caller-side step.

use crate::diagnostic::Diagnostic;
use crate::error::{PropvetError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// One NDJSON audit record: a diagnostic plus the time it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    /// RFC3339 timestamp when the record was written.
    pub ts: DateTime<Utc>,

    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

impl ReportRecord {
    /// Create a record stamped with the current time.
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self {
            ts: Utc::now(),
            diagnostic,
        }
    }
}

/// Format a batch of diagnostics as a human-readable report.
///
/// Returns an empty string when there is nothing to report.
pub fn format_report(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let mut msg = format!(
        "Found {} property validation problem(s)\n",
        diagnostics.len()
    );

    for diagnostic in diagnostics {
        msg.push('\n');
        msg.push_str(&format!(
            "[{}] property '{}': {}\n",
            diagnostic.severity, diagnostic.property_name, diagnostic.description
        ));
        if let Some(cause) = &diagnostic.cause {
            msg.push_str(&format!("  Reason: {}\n", cause));
        }
        for (index, solution) in diagnostic.possible_solutions.iter().enumerate() {
            msg.push_str(&format!("  Fix {}: {}\n", index + 1, solution));
        }
        if let Some(docs) = &diagnostic.documentation {
            msg.push_str(&format!("  See: {}\n", docs.anchor()));
        }
    }

    msg
}

/// Append diagnostics to an NDJSON report file, one record per line.
///
/// Creates the file (and its parent directory) on first use. Appending
/// nothing is a no-op and does not create the file.
pub fn append_report(path: &Path, diagnostics: &[Diagnostic]) -> Result<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PropvetError::Report(format!(
                "failed to create report directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PropvetError::Report(format!(
                "failed to open report file '{}': {}",
                path.display(),
                e
            ))
        })?;

    for diagnostic in diagnostics {
        let record = ReportRecord::new(diagnostic.clone());
        let line = serde_json::to_string(&record)
            .map_err(|e| PropvetError::Report(format!("failed to serialize record: {}", e)))?;
        writeln!(file, "{}", line).map_err(|e| {
            PropvetError::Report(format!(
                "failed to append to report file '{}': {}",
                path.display(),
                e
            ))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::ProblemId;
    use crate::test_support::fixture_dir;

    fn sample() -> Diagnostic {
        Diagnostic::new(
            ProblemId::InputDoesNotExist,
            "configFile",
            "file '/work/absent.conf' doesn't exist",
        )
        .with_cause("An input is missing")
        .with_solution("Make sure the file exists before the task is called")
        .documented_at("validation_problems", "input_does_not_exist")
    }

    #[test]
    fn empty_batch_formats_to_nothing() {
        assert_eq!(format_report(&[]), "");
    }

    #[test]
    fn report_lists_description_cause_and_numbered_fixes() {
        let report = format_report(&[sample()]);

        assert!(report.starts_with("Found 1 property validation problem(s)"));
        assert!(report.contains("[ERROR] property 'configFile': file '/work/absent.conf' doesn't exist"));
        assert!(report.contains("  Reason: An input is missing"));
        assert!(report.contains("  Fix 1: Make sure the file exists before the task is called"));
        assert!(report.contains("  See: validation_problems#input_does_not_exist"));
    }

    #[test]
    fn append_writes_one_json_line_per_diagnostic() {
        let temp = fixture_dir();
        let report_path = temp.path().join("reports/validation.ndjson");

        append_report(&report_path, &[sample(), sample()]).unwrap();

        let content = std::fs::read_to_string(&report_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        for line in lines {
            let record: ReportRecord = serde_json::from_str(line).unwrap();
            assert_eq!(record.diagnostic.property_name, "configFile");
            assert_eq!(record.diagnostic.problem_id, ProblemId::InputDoesNotExist);
        }
    }

    #[test]
    fn append_accumulates_across_runs() {
        let temp = fixture_dir();
        let report_path = temp.path().join("validation.ndjson");

        append_report(&report_path, &[sample()]).unwrap();
        append_report(&report_path, &[sample()]).unwrap();

        let content = std::fs::read_to_string(&report_path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn empty_append_does_not_create_the_file() {
        let temp = fixture_dir();
        let report_path = temp.path().join("validation.ndjson");

        append_report(&report_path, &[]).unwrap();
        assert!(!report_path.exists());
    }
}
