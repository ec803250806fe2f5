//! Interactive collection loop over the session state machine
//!
//! One axis per step, numbered option selection, backward navigation that
//! never discards answers. Reads from any `BufRead` so tests can script it.

use crate::archetypes;
use crate::scorer::{QuizSession, WizardState};
use crate::{AnswerOption, Axis};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// How the wizard run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardExit {
    /// All questions answered; the session is ready to classify.
    Completed,
    /// The taker quit (or input ended) before finishing.
    Aborted,
}

/// Run the wizard against stdin/stdout.
pub fn run(session: &mut QuizSession) -> Result<WizardExit> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the wizard against arbitrary input/output streams.
pub fn run_with_io<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut R,
    output: &mut W,
) -> Result<WizardExit> {
    writeln!(output)?;
    writeln!(output, "{}", "⛪ C-BTI: 나에게 맞는 영적 집 찾기".bold())?;

    'steps: while let WizardState::Collecting(step) = session.state() {
        let axis = Axis::ALL[step];
        let info = archetypes::axis_info(axis);
        writeln!(output)?;
        writeln!(
            output,
            "{}",
            format!("Part {}/{}. {}", step + 1, Axis::ALL.len(), info.name).bold()
        )?;
        writeln!(output, "{}", info.description.dimmed())?;

        let indices = session.catalog().axis_indices(axis);
        let mut pos = 0usize;
        while pos < indices.len() {
            let idx = indices[pos];
            let question = &session.catalog().questions()[idx];

            writeln!(output)?;
            writeln!(output, "{}", format!("Q{}. {}", idx + 1, question.text).bold())?;
            for (n, option) in AnswerOption::ALL.iter().enumerate() {
                let marker = if session.answer(idx) == Some(*option) {
                    "●"
                } else {
                    " "
                };
                writeln!(output, "  {} {}. {}", marker, n + 1, option.label())?;
            }
            write!(output, "번호 선택 (1-4, b=이전, q=종료): ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(WizardExit::Aborted);
            }

            match line.trim() {
                "q" => return Ok(WizardExit::Aborted),
                "b" => {
                    if pos > 0 {
                        pos -= 1;
                    } else if session.back() {
                        continue 'steps;
                    } else {
                        writeln!(output, "{}", "이미 첫 질문입니다.".yellow())?;
                    }
                }
                "" if session.answer(idx).is_some() => pos += 1,
                choice => match choice.parse::<usize>() {
                    Ok(n @ 1..=4) => {
                        session.record_answer(idx, AnswerOption::ALL[n - 1])?;
                        pos += 1;
                    }
                    _ => writeln!(output, "{}", "⚠️ 1-4 중에서 골라 주세요.".yellow())?,
                },
            }
        }

        // Every question of this axis now has an answer.
        session.advance();
    }

    Ok(WizardExit::Completed)
}
