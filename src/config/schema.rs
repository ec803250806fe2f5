//! Config schema and deserialization

use crate::{ScoreScale, ThresholdRule};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root config structure for .cbtirc.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Which side of 5.0 maps to the low symbol (default: inclusive, <= 5 is low)
    #[serde(default)]
    pub threshold_rule: ThresholdRule,

    /// Option base-score constants (default: the rounded literal values)
    #[serde(default)]
    pub scale: ScoreScale,

    /// Path to a custom question catalog (JSON array). Default: built-in bank.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Whether to append results to the local log. Default: true.
    #[serde(default = "default_log")]
    pub log: bool,

    /// Path of the local result log. Default: .cbti-log.json in the working directory.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Remote spreadsheet endpoint for result rows (requires the `sheets` feature).
    #[serde(default)]
    pub sheet_url: Option<String>,
}

fn default_log() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_rule: ThresholdRule::default(),
            scale: ScoreScale::default(),
            catalog: None,
            log: true,
            log_path: None,
            sheet_url: None,
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, no_log: bool, catalog: Option<&Path>) -> Self {
        if no_log {
            self.log = false;
        }
        if let Some(path) = catalog {
            self.catalog = Some(path.to_path_buf());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_logging_on() {
        let config = Config::default();
        assert!(config.log);
        assert!(config.catalog.is_none());
        assert!(config.sheet_url.is_none());
    }

    #[test]
    fn cli_no_log_wins_over_config() {
        let config = Config::default().merge_with_cli(true, None);
        assert!(!config.log);
    }

    #[test]
    fn cli_catalog_wins_over_config() {
        let mut config = Config::default();
        config.catalog = Some(PathBuf::from("from-config.json"));
        let merged = config.merge_with_cli(false, Some(Path::new("from-cli.json")));
        assert_eq!(merged.catalog.as_deref(), Some(Path::new("from-cli.json")));
    }

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.threshold_rule, ThresholdRule::Inclusive);
        assert_eq!(config.scale, ScoreScale::Literal);
        assert!(config.log);
    }
}
