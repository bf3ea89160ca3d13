//! Playlist ingestion - builds a playable [`Video`] from a raw HLS link
//!
//! This path exists for playback without catalog backing: the video carries
//! assets and subtitles derived from the multivariant playlist, and every
//! catalog field stays at its default.

use crate::{
    config::IngestConfig,
    error::Error,
    playlist::{baseline, build_assets, PlaylistDecoder, TagModel},
    types::{Subtitle, Video},
    Result,
};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Build a [`Video`] from a decoded playlist fetched from `playlist_url`
pub fn ingest(tags: &TagModel, playlist_url: &str) -> Video {
    let assets = build_assets(&tags.variant_streams, &tags.uris, &tags.media, playlist_url);

    let per_asset: Vec<Vec<Subtitle>> = assets.iter().map(|a| a.subtitles.clone()).collect();
    let subtitles = baseline(&per_asset);

    Video {
        assets,
        subtitles,
        ..Video::from_hls_link(playlist_url)
    }
}

/// Fetches raw playlist bytes
#[async_trait]
pub trait PlaylistFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Bytes>;
}

/// HTTP fetcher backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &IngestConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlaylistFetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &Url) -> Result<Bytes> {
        debug!("Fetching HLS playlist: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::PlaylistFetch(e.to_string()))?;

        response
            .bytes()
            .await
            .map_err(|e| Error::PlaylistFetch(e.to_string()))
    }
}

/// Fetch, decode and ingest pipeline
pub struct PlaylistIngestor<F, D> {
    fetcher: F,
    decoder: D,
}

impl<F: PlaylistFetcher, D: PlaylistDecoder> PlaylistIngestor<F, D> {
    pub fn new(fetcher: F, decoder: D) -> Self {
        Self { fetcher, decoder }
    }

    /// Load the playlist at `playlist_url` and turn it into a [`Video`]
    #[instrument(skip(self))]
    pub async fn load(&self, playlist_url: &str) -> Result<Video> {
        let url = Url::parse(playlist_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", playlist_url, e)))?;

        let raw = self.fetcher.fetch(&url).await?;
        self.ingest_bytes(&raw, playlist_url)
    }

    /// Decode an already-fetched playlist body and ingest it
    pub fn ingest_bytes(&self, raw: &[u8], playlist_url: &str) -> Result<Video> {
        let tags = self.decoder.decode(raw)?;
        let video = ingest(&tags, playlist_url);

        info!(
            assets = video.assets.len(),
            subtitles = video.subtitles.len(),
            "Ingested HLS playlist"
        );

        Ok(video)
    }
}
