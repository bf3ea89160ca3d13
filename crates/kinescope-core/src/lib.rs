//! Kinescope Core - Playback data library for Kinescope
//!
//! This crate provides the data side of video playback:
//! - HLS multivariant playlist ingestion into a normalized [`Video`]
//! - Quality deduplication and subtitle reconciliation across renditions
//! - Player configuration from catalog ids or raw HLS links
//! - Playback telemetry (unique seconds, views, heartbeats, buffering)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Kinescope Core                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐                             │
//! │  │   Playlist   │  │   Playlist   │                             │
//! │  │   Fetcher    │──│   Decoder    │                             │
//! │  └──────────────┘  └──────┬───────┘                             │
//! │                           │ TagModel                            │
//! │  ┌──────────────┐  ┌──────┴───────┐  ┌──────────────┐           │
//! │  │     URL      │──│    Asset     │──│   Subtitle   │           │
//! │  │   Resolver   │  │  Normalizer  │  │  Reconciler  │           │
//! │  └──────────────┘  └──────┬───────┘  └──────────────┘           │
//! │                           │                                     │
//! │                    ┌──────┴──────┐         ┌──────────────┐     │
//! │                    │   Config    │         │   Playback   │     │
//! │                    │  Provider   │         │  Telemetry   │     │
//! │                    └─────────────┘         └──────────────┘     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod ingest;
pub mod language;
pub mod playlist;
pub mod telemetry;
pub mod types;

pub use config::{
    ConfigProvider, IngestConfig, PlaybackOptions, PlaybackSource, PlayerConfig, TelemetryConfig,
};
pub use error::{Error, Result};
pub use ingest::{ingest, HttpFetcher, PlaylistFetcher, PlaylistIngestor};
pub use playlist::{M3u8Decoder, PlaylistDecoder, TagModel};
pub use telemetry::{EventLog, PlaybackTelemetry, TelemetryEvent, TelemetryRecord, TelemetrySink};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
