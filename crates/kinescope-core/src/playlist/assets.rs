//! Asset list construction from variant streams

use super::{subtitles::subtitles_for_group, url::resolve, AlternativeMedia, VariantStream};
use crate::types::{Asset, Resolution};
use tracing::{debug, warn};

/// Build one asset per distinct quality, in playlist order.
///
/// The first variant of a given quality wins, so at most one asset without a
/// resolution exists per playlist. Variant URIs that cannot be resolved fall
/// back to `playlist_url` itself.
pub fn build_assets(
    variant_streams: &[VariantStream],
    uris: &[String],
    media: &[AlternativeMedia],
    playlist_url: &str,
) -> Vec<Asset> {
    let mut assets: Vec<Asset> = Vec::new();

    for (stream, uri) in variant_streams.iter().zip(uris) {
        let quality = quality(stream.resolution.as_ref());

        if assets.iter().any(|a| a.quality == quality) {
            debug!(%quality, %uri, "Skipping duplicate quality variant");
            continue;
        }

        let url = resolve(uri, playlist_url).unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to playlist URL for variant");
            playlist_url.to_string()
        });

        assets.push(Asset {
            file_type: file_type(&stream.codecs).to_string(),
            quality,
            subtitles: subtitles_for_group(stream.subtitles.as_deref(), media, playlist_url),
            resolution: stream
                .resolution
                .map(|r| r.to_string())
                .unwrap_or_default(),
            url,
            ..Default::default()
        });
    }

    assets
}

fn quality(resolution: Option<&Resolution>) -> String {
    resolution.map(Resolution::quality_label).unwrap_or_default()
}

/// `mp4` when any codec tag names an MP4 sample entry
fn file_type(codecs: &[String]) -> &'static str {
    if codecs.iter().any(|c| c.starts_with("mp4")) {
        "mp4"
    } else {
        ""
    }
}
