//! quizrun CLI — timed CSV quizzes in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::run::QuizArgs;

#[derive(Parser)]
#[command(
    name = "quizrun",
    version,
    about = "Timed CSV quizzes in the terminal",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    quiz: QuizArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a quiz file without running it
    Validate {
        /// Path to quiz CSV data file [default: problems.csv]
        #[arg(long)]
        quizpath: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample quiz
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::run::execute(cli.quiz).await,
        Some(Commands::Validate { quizpath, config }) => {
            commands::validate::execute(quizpath, config)
        }
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
