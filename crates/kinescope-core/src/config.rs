//! Player configuration
//!
//! Settings structs are plain serde types with defaults, so a host can load
//! them from JSON and override only what it needs. [`ConfigProvider`] turns a
//! playback source into the [`PlayerConfig`] a player is started with.

use crate::{
    error::Error,
    ingest::{PlaylistFetcher, PlaylistIngestor},
    playlist::PlaylistDecoder,
    types::Video,
    Result,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{instrument, warn};

/// Playlist fetch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 30_000,
            user_agent: concat!("kinescope-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl IngestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_ms == 0 {
            return Err(Error::InvalidConfig(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Playback analytics settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Unique seconds watched before a playback counts as a view
    pub view_threshold_secs: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            view_threshold_secs: 30,
        }
    }
}

impl TelemetryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.view_threshold_secs == 0 {
            return Err(Error::InvalidConfig(
                "view_threshold_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a settings struct from JSON, filling missing fields with defaults
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// What to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackSource {
    /// Catalog video id, resolved by the catalog API
    VideoId(String),
    /// Raw multivariant playlist link
    HlsLink(String),
}

/// Player presentation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackOptions {
    pub is_muted: bool,
    /// Restart from the beginning when playback ends
    pub looped: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            is_muted: true,
            looped: false,
        }
    }
}

/// Everything a player needs to start
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub video_id: Option<String>,
    pub video: Option<Video>,
    pub is_muted: bool,
    pub looped: bool,
}

impl PlayerConfig {
    fn new(video_id: Option<String>, video: Option<Video>, options: PlaybackOptions) -> Self {
        Self {
            video_id,
            video,
            is_muted: options.is_muted,
            looped: options.looped,
        }
    }
}

/// Builds [`PlayerConfig`]s from playback sources
pub struct ConfigProvider<F, D> {
    ingestor: PlaylistIngestor<F, D>,
}

impl<F: PlaylistFetcher, D: PlaylistDecoder> ConfigProvider<F, D> {
    pub fn new(ingestor: PlaylistIngestor<F, D>) -> Self {
        Self { ingestor }
    }

    /// Resolve `source` into a player config.
    ///
    /// Video ids pass through untouched; HLS links are fetched and ingested.
    #[instrument(skip(self))]
    pub async fn provide(
        &self,
        source: PlaybackSource,
        options: PlaybackOptions,
    ) -> Result<PlayerConfig> {
        match source {
            PlaybackSource::VideoId(id) => Ok(PlayerConfig::new(Some(id), None, options)),
            PlaybackSource::HlsLink(link) => {
                let video = self.ingestor.load(&link).await?;
                Ok(PlayerConfig::new(None, Some(video), options))
            }
        }
    }

    /// Like [`provide`](Self::provide), but any failure means "no config"
    pub async fn provide_or_none(
        &self,
        source: PlaybackSource,
        options: PlaybackOptions,
    ) -> Option<PlayerConfig> {
        match self.provide(source, options).await {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(code = e.error_code(), error = %e, "Playback configuration unavailable");
                None
            }
        }
    }

    /// Completion-style variant; `completion` runs exactly once
    pub async fn provide_with<C>(&self, source: PlaybackSource, options: PlaybackOptions, completion: C)
    where
        C: FnOnce(Option<PlayerConfig>),
    {
        completion(self.provide_or_none(source, options).await);
    }
}
