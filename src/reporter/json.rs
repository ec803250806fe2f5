//! JSON reporter for machine-readable output

use crate::archetypes::{self, Archetype};
use crate::{AxisAverages, Outcome};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a classification result as JSON
    pub fn report(&self, outcome: &Outcome) -> String {
        let output = JsonOutput {
            type_code: outcome.type_code.to_string(),
            axis_averages: outcome.axis_averages.rounded(),
            archetype: archetypes::lookup(&outcome.type_code),
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput {
    type_code: String,
    axis_averages: AxisAverages,
    archetype: &'static Archetype,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> Outcome {
        Outcome {
            type_code: "TGSM".parse().unwrap(),
            axis_averages: AxisAverages {
                theology: 3.3333333,
                drive: 6.0,
                society: 7.0,
                culture: 6.0,
            },
        }
    }

    #[test]
    fn report_has_expected_keys() {
        let json = JsonReporter::new().report(&outcome());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["typeCode"], "TGSM");
        assert!(parsed.get("axisAverages").is_some());
        assert!(parsed.get("archetype").is_some());
        assert_eq!(parsed["archetype"]["person"], "마더 테레사");
    }

    #[test]
    fn averages_are_rounded_to_one_decimal() {
        let json = JsonReporter::new().report(&outcome());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["axisAverages"]["theology"], 3.3);
    }

    #[test]
    fn pretty_output_is_indented() {
        let json = JsonReporter::new().pretty().report(&outcome());
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn unknown_code_reports_fallback_archetype() {
        let unknown = Outcome {
            type_code: "XXXX".parse().unwrap(),
            axis_averages: AxisAverages::default(),
        };
        let json = JsonReporter::new().report(&unknown);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["archetype"]["title"], "알 수 없음");
    }
}
