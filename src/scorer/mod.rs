//! Scoring core: session state and the pure classification transform

pub mod scoring;
pub mod session;

pub use scoring::{ScoreError, Scorer};
pub use session::{QuizSession, WizardState};
