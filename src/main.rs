//! C-BTI quiz CLI

use anyhow::{Context, Result};
use cbti::catalog::Catalog;
use cbti::config::{load_config, Config, CONFIG_FILENAME};
use cbti::history;
use cbti::reporter::{ConsoleReporter, JsonReporter};
use cbti::scorer::{QuizSession, ScoreError, Scorer};
use cbti::wizard::{self, WizardExit};
use cbti::{AnswerOption, Outcome};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// C-BTI: belief-type quiz scoring and classification
#[derive(Parser, Debug)]
#[command(name = "cbti")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answers file (JSON array of option labels, null for unanswered);
    /// omit to take the quiz interactively
    answers: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (one-line result)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (includes the axis pole comparison)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .cbtirc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use a custom question catalog (JSON array)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Skip appending the result to the local log
    #[arg(long)]
    no_log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .cbtirc.json with sensible defaults
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print the active question catalog as JSON
    Questions {
        /// Use a custom question catalog (JSON array)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        match cmd {
            Commands::Init { dir } => return run_init(dir.as_deref()),
            Commands::Questions { catalog } => return run_questions(catalog.as_deref()),
        }
    }

    let work_dir = std::env::current_dir().context("Failed to get current directory")?;

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?
        .merge_with_cli(args.no_log, args.catalog.as_deref());

    let catalog = match config.catalog {
        Some(ref path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let mut session = QuizSession::new(&catalog);

    if let Some(ref answers_path) = args.answers {
        let answers = read_answers(answers_path)?;
        apply_answers(&mut session, &answers)?;
    } else {
        match wizard::run(&mut session)? {
            WizardExit::Completed => {}
            WizardExit::Aborted => {
                eprintln!("{}: 진단이 중단되었습니다", "Info".blue());
                return Ok(ExitCode::from(1));
            }
        }
    }

    let scorer = Scorer::new()
        .with_scale(config.scale)
        .with_threshold(config.threshold_rule);

    let outcome = match scorer.classify(&session) {
        Ok(outcome) => outcome,
        Err(e @ ScoreError::Incomplete { .. }) => {
            eprintln!("{}: {}", "Incomplete".yellow().bold(), e);
            eprintln!("⚠️ 모든 질문에 답변해 주세요!");
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&outcome));
    } else if args.quiet {
        ConsoleReporter::new().report_quiet(&outcome);
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        reporter.report(&outcome);
    }

    // Persist the anonymized result row; failure never affects the result.
    if config.log {
        let log_path = config
            .log_path
            .clone()
            .unwrap_or_else(|| history::default_log_path(&work_dir));
        let mut log = history::load_log(&log_path);
        history::append_outcome(&mut log, &outcome);
        if let Err(e) = history::save_log(&log_path, &log) {
            if !args.quiet {
                eprintln!("{}: Failed to save result log: {}", "Warning".yellow(), e);
            }
        }
    }

    append_to_sheet(&config, &outcome, args.quiet);

    Ok(ExitCode::SUCCESS)
}

fn run_init(dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = r#"{
  "thresholdRule": "inclusive",
  "scale": "literal",
  "log": true
}
"#;
    // Note: Users can also add these options to the config:
    // - "catalog": "questions.json" - custom question bank
    // - "logPath": "results.json" - where the result log is written
    // - "sheetUrl": "https://..." - remote spreadsheet endpoint (sheets feature)

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {}",
        "Done".green().bold(),
        config_path.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_questions(catalog_path: Option<&Path>) -> Result<ExitCode> {
    let catalog = match catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    println!("{}", serde_json::to_string_pretty(catalog.questions())?);
    Ok(ExitCode::SUCCESS)
}

/// Read an answers file: a JSON array of option labels, with null (or a short
/// array) for unanswered questions. Unknown labels fail fast.
fn read_answers(path: &Path) -> Result<Vec<Option<AnswerOption>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid answers file: {}", path.display()))
}

/// Fill a session from file answers. More entries than questions is a hard
/// error; fewer just leaves the tail unanswered.
fn apply_answers(
    session: &mut QuizSession,
    answers: &[Option<AnswerOption>],
) -> Result<()> {
    let total = session.catalog().len();
    if answers.len() > total {
        anyhow::bail!(
            "answers file has {} entries but the catalog has {} questions",
            answers.len(),
            total
        );
    }
    for (index, answer) in answers.iter().enumerate() {
        if let Some(option) = answer {
            session.record_answer(index, *option)?;
        }
    }
    Ok(())
}

#[cfg(feature = "sheets")]
fn append_to_sheet(config: &Config, outcome: &Outcome, quiet: bool) {
    use cbti::sheets::SheetClient;

    let entry = history::entry_from_outcome(outcome);
    match SheetClient::resolve(config.sheet_url.as_deref()) {
        Ok(Some(client)) => {
            if let Err(e) = client.append(&entry) {
                if !quiet {
                    eprintln!("{}: Failed to append to sheet: {}", "Warning".yellow(), e);
                }
            } else if !quiet {
                eprintln!("{}: Result appended to sheet", "Info".blue());
            }
        }
        Ok(None) => {}
        Err(e) => {
            if !quiet {
                eprintln!("{}: {}", "Warning".yellow(), e);
            }
        }
    }
}

#[cfg(not(feature = "sheets"))]
fn append_to_sheet(_config: &Config, _outcome: &Outcome, _quiet: bool) {}
