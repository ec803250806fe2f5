//! The pure scoring transform: effective scores, axis averages, type code

use crate::scorer::QuizSession;
use crate::{
    AnswerOption, Axis, AxisAverages, Outcome, Question, ScoreScale, ThresholdRule, TypeCode,
    MAX_SCORE,
};
use thiserror::Error;

/// Scoring precondition violations. These indicate caller bugs or an
/// incomplete response set, never recoverable-by-guessing conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("{missing} of {total} questions are unanswered")]
    Incomplete { missing: usize, total: usize },
    #[error("axis {0} has no answered questions")]
    EmptyAxis(Axis),
    #[error("question index {index} out of range (catalog has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },
}

/// Deterministic transform from a complete response set to a type code plus
/// axis averages. Holds the two configured knobs and no other state.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    scale: ScoreScale,
    threshold: ThresholdRule,
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            scale: ScoreScale::default(),
            threshold: ThresholdRule::default(),
        }
    }

    pub fn with_scale(mut self, scale: ScoreScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_threshold(mut self, threshold: ThresholdRule) -> Self {
        self.threshold = threshold;
        self
    }

    /// Polarity-adjusted score for one response: reverse-phrased questions
    /// invert the base score so that higher always means the axis's high pole.
    pub fn effective_score(&self, question: &Question, option: AnswerOption) -> f64 {
        let base = option.base_score(self.scale);
        if question.reverse {
            MAX_SCORE - base
        } else {
            base
        }
    }

    /// Arithmetic mean of effective scores over the axis's answered questions.
    /// Errors when the axis has no answered question; callers classify only
    /// behind the completeness guard.
    pub fn axis_average(&self, session: &QuizSession, axis: Axis) -> Result<f64, ScoreError> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for (question, answer) in session
            .catalog()
            .questions()
            .iter()
            .zip(session.answers().iter())
        {
            if question.axis != axis {
                continue;
            }
            if let Some(option) = answer {
                sum += self.effective_score(question, *option);
                count += 1;
            }
        }
        if count == 0 {
            return Err(ScoreError::EmptyAxis(axis));
        }
        Ok(sum / count as f64)
    }

    /// Averages for all four axes.
    pub fn axis_averages(&self, session: &QuizSession) -> Result<AxisAverages, ScoreError> {
        let mut averages = AxisAverages::default();
        for axis in Axis::ALL {
            averages.set(axis, self.axis_average(session, axis)?);
        }
        Ok(averages)
    }

    /// Classify a complete response set. Incomplete sessions are rejected with
    /// a precondition error rather than producing a misleading code.
    pub fn classify(&self, session: &QuizSession) -> Result<Outcome, ScoreError> {
        if !session.is_complete() {
            return Err(ScoreError::Incomplete {
                missing: session.unanswered_count(),
                total: session.catalog().len(),
            });
        }

        let averages = self.axis_averages(session)?;
        let mut symbols = ['\0'; 4];
        for (i, axis) in Axis::ALL.iter().enumerate() {
            symbols[i] = if self.threshold.is_low(averages.get(*axis)) {
                axis.low_symbol()
            } else {
                axis.high_symbol()
            };
        }

        Ok(Outcome {
            type_code: TypeCode::new(symbols),
            axis_averages: averages,
        })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}
