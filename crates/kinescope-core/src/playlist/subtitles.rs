//! Subtitle extraction and cross-rendition reconciliation

use super::{url::resolve, AlternativeMedia};
use crate::types::Subtitle;
use tracing::trace;

/// Subtitle tracks of the `#EXT-X-MEDIA` group a rendition references.
///
/// Entries without a language or with an unresolvable URI are skipped.
pub fn subtitles_for_group(
    group_id: Option<&str>,
    media: &[AlternativeMedia],
    playlist_url: &str,
) -> Vec<Subtitle> {
    let Some(group_id) = group_id else {
        return Vec::new();
    };

    media
        .iter()
        .filter(|m| m.group_id == group_id)
        .filter_map(|m| {
            let language = m.language.as_ref()?;
            let url = match resolve(m.uri.as_deref().unwrap_or_default(), playlist_url) {
                Ok(url) => url,
                Err(e) => {
                    trace!(group_id, name = %m.name, error = %e, "Skipping subtitle entry");
                    return None;
                }
            };
            Some(Subtitle::new(m.name.clone(), language.clone(), url))
        })
        .collect()
}

/// Subtitles that every rendition can be expected to offer.
///
/// Takes the smallest per-asset list (first one on ties) and keeps only the
/// tracks whose title also shows up in some other asset's list.
pub fn baseline(per_asset: &[Vec<Subtitle>]) -> Vec<Subtitle> {
    let Some((min_index, smallest)) = per_asset
        .iter()
        .enumerate()
        .min_by_key(|(_, subtitles)| subtitles.len())
    else {
        return Vec::new();
    };

    let pool: Vec<String> = per_asset
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != min_index)
        .flat_map(|(_, subtitles)| subtitles.iter().map(Subtitle::title))
        .collect();

    smallest
        .iter()
        .filter(|s| pool.contains(&s.title()))
        .cloned()
        .collect()
}
