//! CLI command implementations

use crate::output;
use anyhow::Context;
use kinescope_core::{
    config::from_json_str, ingest as ingest_tags, EventLog, HttpFetcher, IngestConfig,
    M3u8Decoder, PlaybackTelemetry, PlaylistDecoder, PlaylistIngestor, TelemetryConfig,
};
use serde::Deserialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Settings file contents
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ingest: IngestConfig,
    pub telemetry: TelemetryConfig,
}

impl Settings {
    /// Load settings from `path`, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = from_json_str(&text)?;
        settings.ingest.validate()?;
        settings.telemetry.validate()?;

        debug!(?settings, "Loaded settings");
        Ok(settings)
    }
}

/// Fetch and ingest a remote playlist
pub async fn ingest(playlist_url: &str, settings: &Settings, format: &str) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(&settings.ingest)?;
    let ingestor = PlaylistIngestor::new(fetcher, M3u8Decoder::new());

    let video = ingestor
        .load(playlist_url)
        .await
        .with_context(|| format!("playback configuration unavailable for {}", playlist_url))?;

    output::print_video(&video, format)
}

/// Ingest a playlist file from disk
pub fn inspect(file: &Path, base_url: &str, format: &str) -> anyhow::Result<()> {
    Url::parse(base_url).with_context(|| format!("base URL must be absolute: {}", base_url))?;

    let raw = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let tags = M3u8Decoder::new().decode(&raw)?;
    let video = ingest_tags(&tags, base_url);

    output::print_video(&video, format)
}

/// Replay seconds through a telemetry session and print the events
pub fn telemetry(
    duration: u64,
    view_threshold: Option<u64>,
    buffering_ms: Option<u64>,
    seconds: &[u64],
    settings: &Settings,
    format: &str,
) -> anyhow::Result<()> {
    let mut config = settings.telemetry.clone();
    if let Some(threshold) = view_threshold {
        config.view_threshold_secs = threshold;
    }
    config.validate()?;

    let mut session = PlaybackTelemetry::from_config(duration, &config, EventLog::new());
    debug!(step = session.step(), "Telemetry session started");

    for &second in seconds {
        session.register(second);
    }

    if let Some(ms) = buffering_ms {
        let start = Instant::now();
        session.start_buffering_at(start);
        session.stop_buffering_at(start + Duration::from_millis(ms));
    }

    let summary = output::TelemetrySummary {
        step: session.step(),
        unique_seconds: session.unique_seconds(),
        view_reached: session.view_reached(),
    };
    let log = session.into_sink();

    output::print_telemetry(&summary, log.records(), format)
}
