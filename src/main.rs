//! Wordle - CLI
//!
//! Play in the terminal UI (default) or line by line, show statistics, or score
//! a single guess.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use wordle_game::{
    commands::{run_simple, score_words, show_stats},
    config::GameConfig,
    core::Difficulty,
    game::Game,
    interactive::{App, run_tui},
    validation::{DEFAULT_API_URL, Validator},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty of the first round: easy (default), medium, hard
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Directory for saved statistics (default: platform data directory)
    #[arg(long, global = true)]
    stats_dir: Option<PathBuf>,

    /// Keep statistics for this session only
    #[arg(long, global = true)]
    no_persist: bool,

    /// Never contact the dictionary service; unknown words are accepted
    #[arg(long, global = true)]
    offline: bool,

    /// Dictionary service entries endpoint
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Give up on a dictionary lookup after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    lookup_timeout: Option<u64>,

    /// Extra accepted words, one per line
    #[arg(long, global = true, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Write log output to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show saved statistics
    Stats,

    /// Score a guess against a given secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            difficulty: self.difficulty,
            stats_dir: self.stats_dir.clone(),
            persist: !self.no_persist,
            online: !self.offline,
            api_url: self.api_url.clone(),
            lookup_timeout: self.lookup_timeout.map(Duration::from_secs),
            dictionary: self.dictionary.clone(),
        }
    }
}

/// Set up `env_logger`
///
/// `RUST_LOG` overrides the default level. Without a log file the TUI stays
/// silent so log lines never tear the screen.
fn init_logging(log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let default_level = if tui && log_file.is_none() {
        LevelFilter::Off
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level).parse_default_env();

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui = matches!(cli.command, None | Some(Commands::Play));
    init_logging(cli.log_file.as_ref(), tui)?;

    let config = cli.config();

    match cli.command {
        Some(Commands::Score { secret, guess }) => {
            score_words(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Some(Commands::Stats) => {
            show_stats(&config.open_stats());
            Ok(())
        }
        Some(Commands::Simple) => run_simple_command(&config),
        None | Some(Commands::Play) => run_play_command(&config),
    }
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let catalog = config.build_catalog()?;
    let validator = Validator::new(&catalog, config.build_oracle());
    let mut game = Game::new(&catalog, config.difficulty, config.open_stats());

    run_simple(&mut game, &validator, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let catalog = config.build_catalog()?;
    let validator = Validator::new(&catalog, config.build_oracle());
    let game = Game::new(&catalog, config.difficulty, config.open_stats());

    run_tui(App::new(game), &validator)
}
