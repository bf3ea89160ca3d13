//! Decoded multivariant playlist tags
//!
//! This is the shape a [`PlaylistDecoder`](super::PlaylistDecoder) hands to
//! the ingestion code: `#EXT-X-STREAM-INF` descriptors, the URI line that
//! follows each of them, and the `#EXT-X-MEDIA` entries.

use crate::types::Resolution;

/// One `#EXT-X-STREAM-INF` descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantStream {
    /// Peak bandwidth in bits per second
    pub bandwidth: Option<u64>,
    pub resolution: Option<Resolution>,
    /// Codec tags in declaration order, e.g. `["avc1.64001f", "mp4a.40.2"]`
    pub codecs: Vec<String>,
    /// `SUBTITLES` group id
    pub subtitles: Option<String>,
}

/// One `#EXT-X-MEDIA` entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternativeMedia {
    pub group_id: String,
    pub language: Option<String>,
    pub name: String,
    pub uri: Option<String>,
}

/// Decoded multivariant playlist.
///
/// `variant_streams[i]` is described by the tag whose URI line is `uris[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagModel {
    pub variant_streams: Vec<VariantStream>,
    pub uris: Vec<String>,
    pub media: Vec<AlternativeMedia>,
}

impl TagModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variant together with its URI, keeping both lists aligned
    pub fn push_variant(&mut self, stream: VariantStream, uri: impl Into<String>) {
        self.variant_streams.push(stream);
        self.uris.push(uri.into());
    }
}
