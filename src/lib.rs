//! C-BTI: belief-type quiz scoring and classification
//!
//! This library turns a battery of Likert-scale responses into four axis
//! averages and a 4-character type code, and resolves the descriptive
//! archetype content for that code.

pub mod archetypes;
pub mod catalog;
pub mod config;
pub mod history;
pub mod reporter;
pub mod scorer;
pub mod sheets;
pub mod wizard;

use serde::{Deserialize, Serialize};

/// Top of the score scale; effective scores and axis averages live in [0, MAX_SCORE].
pub const MAX_SCORE: f64 = 10.0;

/// The four bipolar quiz axes, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    Theology,
    Drive,
    Society,
    Culture,
}

impl Axis {
    /// Fixed classification order; the type code concatenates one symbol per axis in this order.
    pub const ALL: [Axis; 4] = [Axis::Theology, Axis::Drive, Axis::Society, Axis::Culture];

    /// Symbol appended when the axis average falls on the low side of the threshold.
    pub fn low_symbol(self) -> char {
        match self {
            Axis::Theology => 'T',
            Axis::Drive => 'D',
            Axis::Society => 'P',
            Axis::Culture => 'L',
        }
    }

    /// Symbol appended when the axis average falls on the high side of the threshold.
    pub fn high_symbol(self) -> char {
        match self {
            Axis::Theology => 'C',
            Axis::Drive => 'G',
            Axis::Society => 'S',
            Axis::Culture => 'M',
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Theology => write!(f, "Theology"),
            Axis::Drive => write!(f, "Drive"),
            Axis::Society => write!(f, "Society"),
            Axis::Culture => write!(f, "Culture"),
        }
    }
}

/// One of the four ordinal answer labels. Serialized as the Korean label
/// shown to quiz takers, which is also the format of answers files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOption {
    #[serde(rename = "매우 그렇다")]
    StronglyAgree,
    #[serde(rename = "조금 그렇다")]
    Agree,
    #[serde(rename = "조금 아니다")]
    Disagree,
    #[serde(rename = "매우 아니다")]
    StronglyDisagree,
}

impl AnswerOption {
    /// Presentation order, strongest agreement first.
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::StronglyAgree,
        AnswerOption::Agree,
        AnswerOption::Disagree,
        AnswerOption::StronglyDisagree,
    ];

    /// The Korean label shown to quiz takers.
    pub fn label(self) -> &'static str {
        match self {
            AnswerOption::StronglyAgree => "매우 그렇다",
            AnswerOption::Agree => "조금 그렇다",
            AnswerOption::Disagree => "조금 아니다",
            AnswerOption::StronglyDisagree => "매우 아니다",
        }
    }

    /// Base score on the 0-10 scale before any polarity adjustment.
    pub fn base_score(self, scale: ScoreScale) -> f64 {
        match scale {
            ScoreScale::Literal => match self {
                AnswerOption::StronglyAgree => 10.0,
                AnswerOption::Agree => 6.7,
                AnswerOption::Disagree => 3.3,
                AnswerOption::StronglyDisagree => 0.0,
            },
            ScoreScale::Exact => match self {
                AnswerOption::StronglyAgree => MAX_SCORE,
                AnswerOption::Agree => MAX_SCORE * 2.0 / 3.0,
                AnswerOption::Disagree => MAX_SCORE / 3.0,
                AnswerOption::StronglyDisagree => 0.0,
            },
        }
    }

    /// The option whose base score mirrors this one across the scale midpoint.
    pub fn complement(self) -> AnswerOption {
        match self {
            AnswerOption::StronglyAgree => AnswerOption::StronglyDisagree,
            AnswerOption::Agree => AnswerOption::Disagree,
            AnswerOption::Disagree => AnswerOption::Agree,
            AnswerOption::StronglyDisagree => AnswerOption::StronglyAgree,
        }
    }
}

/// A single catalog statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Statement text as shown to the quiz taker.
    pub text: String,
    /// Axis this question contributes to.
    pub axis: Axis,
    /// Whether the phrasing opposes the axis's high pole, requiring score inversion.
    #[serde(default)]
    pub reverse: bool,
}

/// Numeric base-score constants to use for the four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    /// Rounded constants (10, 6.7, 3.3, 0), kept for output compatibility.
    #[default]
    Literal,
    /// Exact thirds (10, 20/3, 10/3, 0).
    Exact,
}

/// Which side of the 5.0 midpoint maps to an axis's low symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdRule {
    /// Low symbol on average <= 5.0; an average of exactly 5.0 is low.
    #[default]
    Inclusive,
    /// Low symbol on average < 5.0 only.
    Strict,
}

impl ThresholdRule {
    /// True if the given axis average resolves to the low symbol.
    pub fn is_low(self, average: f64) -> bool {
        match self {
            ThresholdRule::Inclusive => average <= MAX_SCORE / 2.0,
            ThresholdRule::Strict => average < MAX_SCORE / 2.0,
        }
    }
}

/// 4-character classification result, one symbol per axis in `Axis::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TypeCode([char; 4]);

impl TypeCode {
    pub fn new(symbols: [char; 4]) -> Self {
        Self(symbols)
    }

    /// Symbol for one axis of the code.
    pub fn symbol(&self, axis: Axis) -> char {
        let idx = Axis::ALL.iter().position(|a| *a == axis).unwrap_or(0);
        self.0[idx]
    }

    pub fn symbols(&self) -> [char; 4] {
        self.0
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> String {
        code.to_string()
    }
}

impl TryFrom<String> for TypeCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let chars: Vec<char> = value.chars().collect();
        match <[char; 4]>::try_from(chars) {
            Ok(symbols) => Ok(TypeCode(symbols)),
            Err(_) => Err(format!("type code must be exactly 4 characters: {:?}", value)),
        }
    }
}

impl std::str::FromStr for TypeCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeCode::try_from(s.to_string())
    }
}

/// Per-axis average scores on the 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisAverages {
    pub theology: f64,
    pub drive: f64,
    pub society: f64,
    pub culture: f64,
}

impl AxisAverages {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Theology => self.theology,
            Axis::Drive => self.drive,
            Axis::Society => self.society,
            Axis::Culture => self.culture,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Theology => self.theology = value,
            Axis::Drive => self.drive = value,
            Axis::Society => self.society = value,
            Axis::Culture => self.culture = value,
        }
    }

    /// Averages rounded to one decimal for display and logging. Classification
    /// always runs on the unrounded values.
    pub fn rounded(&self) -> Self {
        let round1 = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            theology: round1(self.theology),
            drive: round1(self.drive),
            society: round1(self.society),
            culture: round1(self.culture),
        }
    }
}

/// The classification outcome consumed by reporters and the result log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// 4-character type code.
    pub type_code: TypeCode,
    /// Per-axis averages (unrounded).
    pub axis_averages: AxisAverages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_order_is_fixed() {
        assert_eq!(
            Axis::ALL,
            [Axis::Theology, Axis::Drive, Axis::Society, Axis::Culture]
        );
    }

    #[test]
    fn axis_alphabets_have_two_distinct_symbols() {
        for axis in Axis::ALL {
            assert_ne!(axis.low_symbol(), axis.high_symbol());
        }
    }

    #[test]
    fn literal_base_scores_use_rounded_constants() {
        let s = ScoreScale::Literal;
        assert_eq!(AnswerOption::StronglyAgree.base_score(s), 10.0);
        assert_eq!(AnswerOption::Agree.base_score(s), 6.7);
        assert_eq!(AnswerOption::Disagree.base_score(s), 3.3);
        assert_eq!(AnswerOption::StronglyDisagree.base_score(s), 0.0);
    }

    #[test]
    fn exact_scale_is_evenly_spaced() {
        let s = ScoreScale::Exact;
        let scores: Vec<f64> = AnswerOption::ALL.iter().map(|o| o.base_score(s)).collect();
        let step = scores[0] - scores[1];
        assert!((scores[1] - scores[2] - step).abs() < 1e-9);
        assert!((scores[2] - scores[3] - step).abs() < 1e-9);
    }

    #[test]
    fn complement_scores_sum_to_max_on_both_scales() {
        for scale in [ScoreScale::Literal, ScoreScale::Exact] {
            for option in AnswerOption::ALL {
                let sum = option.base_score(scale) + option.complement().base_score(scale);
                assert!((sum - MAX_SCORE).abs() < 1e-9, "{:?} on {:?}", option, scale);
            }
        }
    }

    #[test]
    fn threshold_inclusive_resolves_midpoint_to_low() {
        assert!(ThresholdRule::Inclusive.is_low(5.0));
        assert!(!ThresholdRule::Inclusive.is_low(5.01));
        assert!(ThresholdRule::Inclusive.is_low(0.0));
    }

    #[test]
    fn threshold_strict_resolves_midpoint_to_high() {
        assert!(!ThresholdRule::Strict.is_low(5.0));
        assert!(ThresholdRule::Strict.is_low(4.99));
    }

    #[test]
    fn type_code_roundtrips_through_string() {
        let code: TypeCode = "TGSM".parse().unwrap();
        assert_eq!(code.to_string(), "TGSM");
        assert_eq!(code.symbol(Axis::Theology), 'T');
        assert_eq!(code.symbol(Axis::Culture), 'M');
    }

    #[test]
    fn type_code_rejects_wrong_length() {
        assert!("TGS".parse::<TypeCode>().is_err());
        assert!("TGSML".parse::<TypeCode>().is_err());
    }

    #[test]
    fn answer_option_serializes_as_korean_label() {
        let json = serde_json::to_string(&AnswerOption::StronglyAgree).unwrap();
        assert_eq!(json, "\"매우 그렇다\"");
        let parsed: AnswerOption = serde_json::from_str("\"조금 아니다\"").unwrap();
        assert_eq!(parsed, AnswerOption::Disagree);
    }

    #[test]
    fn unknown_label_fails_to_parse() {
        let parsed: Result<AnswerOption, _> = serde_json::from_str("\"그렇다\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn rounded_averages_keep_one_decimal() {
        let avgs = AxisAverages {
            theology: 3.3333333,
            drive: 6.6666667,
            society: 5.0,
            culture: 9.99,
        };
        let r = avgs.rounded();
        assert_eq!(r.theology, 3.3);
        assert_eq!(r.drive, 6.7);
        assert_eq!(r.society, 5.0);
        assert_eq!(r.culture, 10.0);
    }
}
