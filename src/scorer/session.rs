//! Caller-owned quiz session: recorded answers and the step state machine

use crate::catalog::Catalog;
use crate::scorer::ScoreError;
use crate::{AnswerOption, Axis};

/// Position in the multi-step wizard. Steps walk `Axis::ALL` in order; the
/// session is terminal once the last axis has been passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Collecting answers for `Axis::ALL[index]`.
    Collecting(usize),
    /// All axis steps passed; the response set is ready to classify.
    Classified,
}

/// Session-scoped response state for one quiz run.
///
/// Answers are keyed by catalog index and may be overwritten when the taker
/// revisits a step. The session borrows its catalog; the caller owns both.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    catalog: &'a Catalog,
    answers: Vec<Option<AnswerOption>>,
    step: usize,
}

impl<'a> QuizSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            answers: vec![None; catalog.len()],
            step: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Store or overwrite the response for a question. Out-of-range indices
    /// are a programming error and fail fast.
    pub fn record_answer(&mut self, index: usize, option: AnswerOption) -> Result<(), ScoreError> {
        if index >= self.answers.len() {
            return Err(ScoreError::QuestionOutOfRange {
                index,
                total: self.answers.len(),
            });
        }
        self.answers[index] = Some(option);
        Ok(())
    }

    pub fn answer(&self, index: usize) -> Option<AnswerOption> {
        self.answers.get(index).copied().flatten()
    }

    pub fn answers(&self) -> &[Option<AnswerOption>] {
        &self.answers
    }

    /// Discard all responses and return to the first step.
    pub fn reset(&mut self) {
        self.answers.fill(None);
        self.step = 0;
    }

    /// True iff every catalog question has a response.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// True iff every question of the given axis has a response.
    pub fn axis_complete(&self, axis: Axis) -> bool {
        self.catalog
            .axis_indices(axis)
            .iter()
            .all(|&i| self.answers[i].is_some())
    }

    pub fn unanswered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_none()).count()
    }

    pub fn state(&self) -> WizardState {
        if self.step >= Axis::ALL.len() {
            WizardState::Classified
        } else {
            WizardState::Collecting(self.step)
        }
    }

    /// Axis being collected at the current step, if not yet terminal.
    pub fn current_axis(&self) -> Option<Axis> {
        Axis::ALL.get(self.step).copied()
    }

    /// Move to the next step. Gated: succeeds only when every question of the
    /// current axis has a response.
    pub fn advance(&mut self) -> bool {
        match self.current_axis() {
            Some(axis) if self.axis_complete(axis) => {
                self.step += 1;
                true
            }
            _ => false,
        }
    }

    /// Move to the previous step. Always permitted and never erases responses.
    pub fn back(&mut self) -> bool {
        if self.step > 0 {
            self.step -= 1;
            true
        } else {
            false
        }
    }
}
