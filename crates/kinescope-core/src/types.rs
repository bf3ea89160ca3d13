//! Core types for Kinescope Core

use crate::language;
use serde::{Deserialize, Serialize};

/// Video resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Quality label as shown in the player menu, e.g. `720p`
    pub fn quality_label(&self) -> String {
        format!("{}p", self.height)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A subtitle track attached to a video or one of its assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtitle {
    /// Display name from the source (NAME attribute in HLS)
    pub description: String,
    /// Language tag, e.g. `en` or `pt-BR`
    pub language: String,
    /// Absolute URL of the subtitle playlist
    pub url: String,
}

impl Subtitle {
    pub fn new(
        description: impl Into<String>,
        language: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            language: language.into(),
            url: url.into(),
        }
    }

    /// Human title derived from the language tag.
    ///
    /// Two tracks with the same title are considered the same track, so
    /// `en`, `EN` and `eng` all collapse into `English`.
    pub fn title(&self) -> String {
        language::display_title(&self.language)
    }
}

/// One playable quality rendition of a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    pub id: String,
    pub video_id: String,
    pub original_name: String,
    pub file_size: u64,
    /// `mp4` for fragmented MP4 renditions, empty otherwise
    #[serde(rename = "filetype")]
    pub file_type: String,
    /// Quality label, e.g. `720p`. Empty when the playlist has no resolution.
    pub quality: String,
    pub subtitles: Vec<Subtitle>,
    /// `WIDTHxHEIGHT`, empty when unknown
    pub resolution: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub url: String,
}

/// Chapter marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Start position in seconds
    pub position: f64,
    pub title: String,
}

/// Chapter list of a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapters {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub items: Vec<Chapter>,
}

/// Poster image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poster {
    pub id: String,
    pub url: String,
}

/// File attached to a video in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalMaterial {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Playable video model.
///
/// Catalog-backed videos carry full metadata. Videos synthesized from a raw
/// HLS link only have `assets`, `subtitles` and `hls_link` filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    pub id: String,
    pub project_id: String,
    pub version: u32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub progress: u32,
    /// Duration in seconds
    pub duration: f64,
    pub assets: Vec<Asset>,
    pub chapters: Chapters,
    pub poster: Option<Poster>,
    pub additional_materials: Vec<AdditionalMaterial>,
    pub subtitles: Vec<Subtitle>,
    pub hls_link: String,
}

impl Video {
    /// Empty video pointing at an HLS link
    pub fn from_hls_link(hls_link: impl Into<String>) -> Self {
        Self {
            hls_link: hls_link.into(),
            ..Default::default()
        }
    }

    /// Load a catalog-backed video from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Asset with the given quality label
    pub fn asset(&self, quality: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.quality == quality)
    }

    /// Quality labels in playlist order
    pub fn qualities(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.quality.as_str()).collect()
    }
}
