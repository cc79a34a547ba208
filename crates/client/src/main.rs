//! Frog tongue puzzle terminal driver.
//!
//! Loads a level (a RON file or one of the bundled levels) and plays it from
//! line commands on stdin.
//!
//! ```bash
//! cargo run -p frog-client -- --builtin 1
//! cargo run -p frog-client -- --level my_level.ron --json-events
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use frog_content::{ConfigLoader, LevelLoader, builtin_levels};
use frog_runtime::{Runtime, RuntimeConfig};

use frog_client::{EventFormat, Session};

/// Play frog tongue puzzles in the terminal
#[derive(Parser)]
#[command(name = "frogs")]
#[command(about = "Play frog tongue puzzles in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Level file to play instead of the bundled levels
    #[arg(short, long, value_name = "FILE", conflicts_with = "builtin")]
    level: Option<PathBuf>,

    /// Bundled level to start from (zero based)
    #[arg(short, long, value_name = "INDEX", default_value_t = 0)]
    builtin: usize,

    /// Game configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print events as JSON lines
    #[arg(long)]
    json_events: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for FROGS_* and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = RuntimeConfig::default();
    if let Some(path) = &cli.config {
        config.game_config = ConfigLoader::load(path)?;
    }
    let config = config.with_env_overrides();
    tracing::debug!("runtime config: {:?}", config);

    let (levels, start) = match &cli.level {
        Some(path) => (vec![LevelLoader::load(path)?], 0),
        None => (builtin_levels()?, cli.builtin),
    };

    let runtime = Runtime::with_levels(config, levels);
    let format = if cli.json_events {
        EventFormat::Json
    } else {
        EventFormat::Text
    };
    let mut session = Session::new(runtime, format);
    session
        .runtime_mut()
        .load_index(start)
        .with_context(|| format!("cannot start level {start}"))?;

    tracing::info!("starting {} level(s)", session.runtime().level_count());
    session.run(io::stdin().lock(), io::stdout().lock())
}
