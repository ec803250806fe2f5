//! Append-only result log - persist anonymized outcomes to .cbti-log.json
//!
//! The log is an audit trail: rows are appended after a result is displayed
//! and never read back by the scoring core. Failures here must never surface
//! as user-facing errors.

use crate::{AxisAverages, Outcome};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOG_FILENAME: &str = ".cbti-log.json";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LogFile {
    pub entries: Vec<LogEntry>,
}

/// One anonymized result row: when, which code, and the axis averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub timestamp: String,
    pub type_code: String,
    pub axis_averages: AxisAverages,
}

/// Default log location inside a directory.
pub fn default_log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILENAME)
}

/// Load the log (or return empty when missing or unreadable).
pub fn load_log(path: &Path) -> LogFile {
    if let Ok(content) = fs::read_to_string(path) {
        if let Ok(log) = serde_json::from_str::<LogFile>(&content) {
            return log;
        }
    }
    LogFile::default()
}

/// Save the log to its path.
pub fn save_log(path: &Path, log: &LogFile) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(log).unwrap_or_else(|_| "{}".to_string());
    fs::write(path, content)
}

/// Build a row from an outcome. Averages are stored rounded, matching what
/// was displayed. The same row shape goes to the remote sheet append.
pub fn entry_from_outcome(outcome: &Outcome) -> LogEntry {
    LogEntry {
        timestamp: chrono::Utc::now().to_rfc3339(),
        type_code: outcome.type_code.to_string(),
        axis_averages: outcome.axis_averages.rounded(),
    }
}

/// Append an outcome row to the log.
pub fn append_outcome(log: &mut LogFile, outcome: &Outcome) {
    log.entries.push(entry_from_outcome(outcome));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(code: &str) -> Outcome {
        Outcome {
            type_code: code.parse().unwrap(),
            axis_averages: AxisAverages {
                theology: 3.33,
                drive: 6.0,
                society: 7.0,
                culture: 6.0,
            },
        }
    }

    #[test]
    fn append_adds_row_with_code_and_rounded_averages() {
        let mut log = LogFile::default();
        append_outcome(&mut log, &outcome("TGSM"));

        assert_eq!(log.entries.len(), 1);
        let entry = &log.entries[0];
        assert_eq!(entry.type_code, "TGSM");
        assert_eq!(entry.axis_averages.theology, 3.3);
        assert!(!entry.timestamp.is_empty());
    }

    #[test]
    fn append_never_truncates_earlier_rows() {
        let mut log = LogFile::default();
        for _ in 0..100 {
            append_outcome(&mut log, &outcome("CDPL"));
        }
        assert_eq!(log.entries.len(), 100);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = default_log_path(dir.path());

        let mut log = LogFile::default();
        append_outcome(&mut log, &outcome("TGSM"));
        append_outcome(&mut log, &outcome("CDPL"));
        save_log(&path, &log).unwrap();

        let loaded = load_log(&path);
        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.entries[0].type_code, "TGSM");
        assert_eq!(loaded.entries[1].type_code, "CDPL");
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = load_log(&default_log_path(dir.path()));
        assert!(log.entries.is_empty());
    }

    #[test]
    fn load_corrupt_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = default_log_path(dir.path());
        fs::write(&path, "not valid json {{{").unwrap();
        let log = load_log(&path);
        assert!(log.entries.is_empty());
    }
}
