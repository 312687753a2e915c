use std::path::PathBuf;
use std::time::Duration;

use agentic_quiz::config::{DEFAULT_PERCENTAGE_DECIMALS, DEFAULT_TIME_BUDGET};
use agentic_quiz::{QuestionBank, Quiz, QuizConfig, QuizError};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the built-in bank)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Time limit in minutes
    #[arg(short, long, default_value_t = DEFAULT_TIME_BUDGET.as_secs() / 60)]
    time_limit: u64,

    /// Number of questions to ask, taken from the start of the bank
    #[arg(short = 'n', long)]
    question_count: Option<usize>,

    /// Decimal places shown in percentages
    #[arg(long, default_value_t = DEFAULT_PERCENTAGE_DECIMALS)]
    decimals: u32,

    /// Only check the time limit between questions, not on invalid input
    #[arg(long)]
    no_retry_deadline: bool,

    /// Use the full-screen terminal UI
    #[arg(long)]
    tui: bool,

    /// Print the results as JSON when the quiz ends
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> Result<(), QuizError> {
    let bank = match &args.questions {
        Some(path) => QuestionBank::from_json(path)?,
        None => QuestionBank::builtin()?,
    };

    let config = QuizConfig::default()
        .with_question_count(args.question_count.unwrap_or(bank.len()))
        .with_time_budget(Duration::from_secs(args.time_limit.saturating_mul(60)))
        .with_percentage_decimals(args.decimals)
        .with_recheck_deadline_on_retry(!args.no_retry_deadline);
    let quiz = Quiz::new(bank, config)?;

    let summary = if args.tui {
        quiz.run_tui()?
    } else {
        quiz.run_in_terminal()?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
