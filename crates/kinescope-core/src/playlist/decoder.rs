//! HLS multivariant playlist decoder backed by `m3u8-rs`

use super::{AlternativeMedia, PlaylistDecoder, TagModel, VariantStream};
use crate::{error::Error, types::Resolution, Result};
use m3u8_rs::Playlist;
use tracing::debug;

/// Decodes `#EXTM3U` text with `m3u8-rs`.
///
/// Only multivariant playlists are accepted; a media playlist has no variant
/// descriptors to build assets from.
#[derive(Debug, Clone, Copy, Default)]
pub struct M3u8Decoder;

impl M3u8Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl PlaylistDecoder for M3u8Decoder {
    fn decode(&self, raw: &[u8]) -> Result<TagModel> {
        let master = match m3u8_rs::parse_playlist_res(raw) {
            Ok(Playlist::MasterPlaylist(master)) => master,
            Ok(Playlist::MediaPlaylist(_)) => {
                return Err(Error::PlaylistDecode(
                    "expected a multivariant playlist, got a media playlist".to_string(),
                ))
            }
            Err(e) => {
                return Err(Error::PlaylistDecode(format!(
                    "Failed to parse HLS master: {:?}",
                    e
                )))
            }
        };

        let mut tags = TagModel::new();

        // I-frame only variants are trick-play renditions, not playable assets
        for variant in master.variants.iter().filter(|v| !v.is_i_frame) {
            let stream = VariantStream {
                bandwidth: Some(variant.bandwidth),
                resolution: variant.resolution.map(resolution).transpose()?,
                codecs: variant
                    .codecs
                    .as_deref()
                    .map(split_codecs)
                    .unwrap_or_default(),
                subtitles: variant.subtitles.clone(),
            };
            tags.push_variant(stream, variant.uri.clone());
        }

        tags.media = master
            .alternatives
            .iter()
            .map(|media| AlternativeMedia {
                group_id: media.group_id.clone(),
                language: media.language.clone(),
                name: media.name.clone(),
                uri: media.uri.clone(),
            })
            .collect();

        debug!(
            variants = tags.variant_streams.len(),
            media = tags.media.len(),
            "Decoded multivariant playlist"
        );

        Ok(tags)
    }
}

fn resolution(r: m3u8_rs::Resolution) -> Result<Resolution> {
    match (u32::try_from(r.width), u32::try_from(r.height)) {
        (Ok(width), Ok(height)) => Ok(Resolution { width, height }),
        _ => Err(Error::PlaylistDecode(format!(
            "resolution out of range: {}x{}",
            r.width, r.height
        ))),
    }
}

/// Split a `CODECS` attribute value into individual tags
fn split_codecs(codecs: &str) -> Vec<String> {
    codecs
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
