//! Kinescope CLI - Headless playlist and telemetry tool
//!
//! Features:
//! - Playlist ingestion from a URL or a local file
//! - Telemetry replay of "current second" samples

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// Kinescope CLI - Playback data toolkit
#[derive(Parser)]
#[command(name = "kinescope-cli")]
#[command(version)]
#[command(about = "HLS playlist ingestion and playback telemetry toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// JSON settings file ({"ingest": {...}, "telemetry": {...}})
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a multivariant playlist and show the resulting video
    Ingest {
        /// Absolute playlist URL
        url: String,
    },

    /// Ingest a playlist stored on disk
    Inspect {
        /// Path to the .m3u8 file
        file: PathBuf,

        /// URL the playlist was downloaded from, used to resolve relative URIs
        #[arg(short, long)]
        base_url: String,
    },

    /// Replay playback seconds through a telemetry session
    Telemetry {
        /// Video duration in seconds
        #[arg(short, long)]
        duration: u64,

        /// Unique seconds needed for a view (defaults to the settings file)
        #[arg(short = 't', long)]
        view_threshold: Option<u64>,

        /// Simulate a buffering interval of this many milliseconds at the end
        #[arg(short, long)]
        buffering_ms: Option<u64>,

        /// Playback seconds, in the order the clock reported them
        #[arg(required = true, value_delimiter = ',')]
        seconds: Vec<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let settings = commands::Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Ingest { url } => {
            commands::ingest(&url, &settings, &cli.format).await?;
        }
        Commands::Inspect { file, base_url } => {
            commands::inspect(&file, &base_url, &cli.format)?;
        }
        Commands::Telemetry {
            duration,
            view_threshold,
            buffering_ms,
            seconds,
        } => {
            commands::telemetry(
                duration,
                view_threshold,
                buffering_ms,
                &seconds,
                &settings,
                &cli.format,
            )?;
        }
    }

    Ok(())
}
