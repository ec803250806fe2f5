//! Property tests over the scoring core.

use cbti::catalog::Catalog;
use cbti::scorer::{QuizSession, Scorer};
use cbti::{AnswerOption, Axis, Question, ScoreScale, MAX_SCORE};
use proptest::prelude::*;

fn option_from_index(i: usize) -> AnswerOption {
    AnswerOption::ALL[i % 4]
}

proptest! {
    #[test]
    fn axis_averages_stay_on_the_scale(choices in prop::collection::vec(0usize..4, 50)) {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog);
        for (i, c) in choices.iter().enumerate() {
            session.record_answer(i, option_from_index(*c)).unwrap();
        }
        let outcome = Scorer::new().classify(&session).unwrap();
        for axis in Axis::ALL {
            let avg = outcome.axis_averages.get(axis);
            prop_assert!((0.0..=MAX_SCORE).contains(&avg), "{}: {}", axis, avg);
        }
    }

    #[test]
    fn classification_is_deterministic(choices in prop::collection::vec(0usize..4, 50)) {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog);
        for (i, c) in choices.iter().enumerate() {
            session.record_answer(i, option_from_index(*c)).unwrap();
        }
        let a = Scorer::new().classify(&session).unwrap();
        let b = Scorer::new().classify(&session).unwrap();
        prop_assert_eq!(a.type_code, b.type_code);
    }

    #[test]
    fn reverse_scoring_mirrors_the_base_score(choice in 0usize..4, reverse: bool) {
        let option = option_from_index(choice);
        let question = Question {
            text: "statement".to_string(),
            axis: Axis::Theology,
            reverse,
        };
        let scorer = Scorer::new();
        let effective = scorer.effective_score(&question, option);
        let base = option.base_score(ScoreScale::Literal);
        if reverse {
            prop_assert!((effective - (MAX_SCORE - base)).abs() < 1e-9);
        } else {
            prop_assert!((effective - base).abs() < 1e-9);
        }
    }

    #[test]
    fn complement_recovers_base_score_on_reversed_questions(choice in 0usize..4) {
        let option = option_from_index(choice);
        let question = Question {
            text: "statement".to_string(),
            axis: Axis::Drive,
            reverse: true,
        };
        let scorer = Scorer::new();
        let recovered = scorer.effective_score(&question, option.complement());
        prop_assert!((recovered - option.base_score(ScoreScale::Literal)).abs() < 1e-9);
    }

    #[test]
    fn every_complete_response_set_resolves_a_known_archetype(
        choices in prop::collection::vec(0usize..4, 50)
    ) {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog);
        for (i, c) in choices.iter().enumerate() {
            session.record_answer(i, option_from_index(*c)).unwrap();
        }
        let outcome = Scorer::new().classify(&session).unwrap();
        let archetype = cbti::archetypes::lookup(&outcome.type_code);
        prop_assert_eq!(archetype.code, outcome.type_code.to_string());
    }
}
