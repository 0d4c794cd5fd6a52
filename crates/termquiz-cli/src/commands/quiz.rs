//! The `termquiz quiz` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use termquiz_core::config::load_config_from;
use termquiz_core::error::QuizError;
use termquiz_core::history::{QuizAttempt, QuizHistory};
use termquiz_core::model::{combined_pool, Hub, InfoRecord};
use termquiz_core::parser::{self, DATE_FORMAT};
use termquiz_core::quiz::generate_quiz;
use termquiz_core::session::{QuizScore, QuizSession};
use termquiz_core::statistics::compute_progress;

pub struct QuizArgs {
    pub deck: Option<PathBuf>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub hub: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub history: Option<PathBuf>,
    pub no_record: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: QuizArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let count = args.count.unwrap_or(config.default_question_count);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let hub_filter: Option<Hub> = match &args.hub {
        Some(h) => Some(h.parse().map_err(|e: String| anyhow::anyhow!(e))?),
        None => config.default_hub,
    };
    let date_filter = parse_date_arg(args.date.as_deref())?;
    let from = parse_date_arg(args.from.as_deref())?;
    let to = parse_date_arg(args.to.as_deref())?;
    if let (Some(from), Some(to)) = (from, to) {
        anyhow::ensure!(from <= to, "--from {from} is after --to {to}");
    }

    let deck_path = args.deck.unwrap_or_else(|| config.deck_dir.clone());
    let mut records = parser::load_records(&deck_path)?;
    records.retain(|r| hub_filter.map_or(true, |h| r.hub == h));
    records.retain(|r| date_filter.map_or(true, |d| r.date == d));
    records.retain(|r| in_date_range(r.date, from, to));

    let pool = combined_pool(&records);

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let questions = generate_quiz(&mut rng, &pool, count);

    let mut session = match QuizSession::start(questions) {
        Ok(session) => session,
        Err(QuizError::NoQuestionsAvailable) => {
            println!("No quiz available: no terms found in the selected decks.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let hub = resolve_hub(&records, hub_filter)?;

    println!(
        "Quiz: {} question(s) from {} term(s)\n",
        session.len(),
        pool.len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let Some(score) = run_session(&mut session, stdin.lock(), stdout.lock())? else {
        println!("\nQuiz aborted; nothing recorded.");
        return Ok(());
    };

    if !args.no_record {
        let deck_id = records
            .iter()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let history_path = args.history.unwrap_or(config.history_path);
        let mut history = QuizHistory::load_json(&history_path)?;
        let before = compute_progress(&history).achievements;
        history.record(QuizAttempt::new(hub, deck_id, score));
        history.save_json(&history_path)?;
        eprintln!("Result saved to: {}", history_path.display());
        super::announce_unlocks(&before, &history);
    }

    Ok(())
}

fn parse_date_arg(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|d| {
            NaiveDate::parse_from_str(d.trim(), DATE_FORMAT)
                .with_context(|| format!("invalid date '{d}' (expected YYYY-MM-DD)"))
        })
        .transpose()
}

/// Inclusive on both ends; a missing bound is open.
fn in_date_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

/// Pick the hub a result is recorded under.
fn resolve_hub(records: &[InfoRecord], filter: Option<Hub>) -> Result<Hub> {
    if let Some(hub) = filter {
        return Ok(hub);
    }
    let mut hubs = records.iter().map(|r| r.hub);
    match hubs.next() {
        None => anyhow::bail!("no decks selected"),
        Some(first) if hubs.all(|h| h == first) => Ok(first),
        Some(_) => anyhow::bail!("decks span multiple hubs; pass --hub ai or --hub finance"),
    }
}

/// Ask every question, reading 1-based option numbers line by line.
///
/// Returns `None` if the input ends before the quiz is finished.
fn run_session<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut input: R,
    mut out: W,
) -> Result<Option<QuizScore>> {
    let total = session.len();

    while let Some(question) = session.current().cloned() {
        writeln!(out, "[{}/{}] {}", session.position() + 1, total, question.term)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {}", i + 1, option)?;
        }

        let outcome = loop {
            write!(out, "Answer (1-{}): ", question.option_count())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let selected = match line.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => {
                    writeln!(
                        out,
                        "Please enter a number between 1 and {}.",
                        question.option_count()
                    )?;
                    continue;
                }
            };

            match session.answer(selected) {
                Ok(outcome) => break outcome,
                Err(e) if e.is_retryable() => {
                    writeln!(
                        out,
                        "Please enter a number between 1 and {}.",
                        question.option_count()
                    )?;
                }
                Err(e) => return Err(e.into()),
            }
        };

        if outcome.correct {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(
                out,
                "Wrong. Answer: {}) {}",
                outcome.correct_index + 1,
                question.correct_option()
            )?;
        }
        writeln!(out, "Score: {} / {}\n", session.score(), session.answered())?;
    }

    let score = session.to_score();
    writeln!(
        out,
        "Final score: {} / {} ({}%)",
        score.score,
        score.total,
        score.percentage()
    )?;
    Ok(Some(score))
}
