//! termquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "termquiz",
    version,
    about = "Vocabulary decks and multiple-choice term quizzes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse pasted term/definition lines and print the result
    Parse {
        /// Text file with one pair per line ("-" for stdin)
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Parse pasted terms and merge them into a deck
    AddTerms {
        /// Deck .toml file to update
        #[arg(long)]
        deck: PathBuf,

        /// Text file with one pair per line ("-" for stdin)
        #[arg(long, default_value = "-")]
        input: PathBuf,

        /// Index of the info item receiving the terms
        #[arg(long, default_value = "0")]
        info: usize,
    },

    /// Validate deck TOML files
    Validate {
        /// Path to deck file or directory
        #[arg(long)]
        deck: PathBuf,
    },

    /// Mark an info item of a deck as learned
    Learn {
        /// Deck .toml file
        #[arg(long)]
        deck: PathBuf,

        /// Index of the learned info item
        #[arg(long)]
        info: usize,

        /// History file to record progress in
        #[arg(long)]
        history: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Take a multiple-choice quiz on stdin/stdout
    Quiz {
        /// Path to deck file or directory (default: deck_dir from config)
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Number of questions
        #[arg(long)]
        count: Option<usize>,

        /// Seed for a reproducible quiz
        #[arg(long)]
        seed: Option<u64>,

        /// Only use decks from this hub: ai, finance
        #[arg(long)]
        hub: Option<String>,

        /// Only use decks published on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Only use decks published on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only use decks published on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// History file to record the result in
        #[arg(long)]
        history: Option<PathBuf>,

        /// Do not record the result
        #[arg(long)]
        no_record: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show quiz statistics, learning progress and achievements
    Stats {
        /// History file (default: history_path from config)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example deck
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("termquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, format } => commands::parse::execute(input, format),
        Commands::AddTerms { deck, input, info } => {
            commands::add_terms::execute(deck, input, info)
        }
        Commands::Validate { deck } => commands::validate::execute(deck),
        Commands::Learn {
            deck,
            info,
            history,
            config,
        } => commands::learn::execute(deck, info, history, config),
        Commands::Quiz {
            deck,
            count,
            seed,
            hub,
            date,
            from,
            to,
            history,
            no_record,
            config,
        } => commands::quiz::execute(commands::quiz::QuizArgs {
            deck,
            count,
            seed,
            hub,
            date,
            from,
            to,
            history,
            no_record,
            config,
        }),
        Commands::Stats {
            history,
            format,
            config,
        } => commands::stats::execute(history, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
