//! OpenWordle - CLI
//!
//! Word-guessing game with a TUI and a plain line-based mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use openwordle::{
    commands::{run_simple, run_verify, score_guess},
    dictionary::{
        ALLOWED, ANSWERS, Dictionary,
        loader::{load_from_file, words_from_slice},
    },
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    output::{print_score_result, print_verify_report},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "openwordle",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for picking the hidden word (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Answer list file (default: embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Allowed-guess list file (default: embedded list)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Score one guess against a given target word
    Score {
        /// The hidden word to score against
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Check the word lists for problems
    Verify,
}

/// Load the dictionary from the --answers/--allowed flags
///
/// Either list falls back to the embedded one when its flag is absent.
fn load_dictionary(answers: Option<&Path>, allowed: Option<&Path>) -> Result<Dictionary> {
    if answers.is_none() && allowed.is_none() {
        return Ok(Dictionary::embedded());
    }

    let answer_words = match answers {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read answer list {}", path.display()))?,
        None => words_from_slice(ANSWERS),
    };
    let allowed_words = match allowed {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read allowed list {}", path.display()))?,
        None => words_from_slice(ALLOWED),
    };

    Dictionary::new(answer_words, allowed_words).context("Word lists cannot be used for a game")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.answers.as_deref(), cli.allowed.as_deref())?;
    let config = GameConfig::new().with_max_attempts(cli.max_attempts);
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config, rng),
        Commands::Simple => run_simple_command(&dictionary, config, rng),
        Commands::Score { target, guess } => run_score_command(&dictionary, &target, &guess),
        Commands::Verify => run_verify_command(&dictionary),
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, rng: StdRng) -> Result<()> {
    use openwordle::interactive::{App, run_tui};

    let app = App::new(dictionary, config, rng);
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, config: GameConfig, mut rng: StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    run_simple(dictionary, config, &mut rng, &mut input, &mut out)?;
    Ok(())
}

fn run_score_command(dictionary: &Dictionary, target: &str, guess: &str) -> Result<()> {
    let result = score_guess(dictionary, target, guess)?;
    print_score_result(&result);
    Ok(())
}

fn run_verify_command(dictionary: &Dictionary) -> Result<()> {
    println!(
        "Checking {} answers and {} allowed guesses...",
        dictionary.answers().len(),
        dictionary.allowed_count()
    );

    let report = run_verify(dictionary, true);
    print_verify_report(&report);

    if !report.is_ok() {
        bail!("word list check failed");
    }
    Ok(())
}
