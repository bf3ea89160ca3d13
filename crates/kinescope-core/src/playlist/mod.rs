//! HLS multivariant playlist normalization
//!
//! Decoding the playlist text is delegated to a [`PlaylistDecoder`]; the rest
//! of this module works on the decoded [`TagModel`] and never touches the
//! network.

mod assets;
mod decoder;
mod subtitles;
mod tags;
pub mod url;

pub use assets::build_assets;
pub use decoder::M3u8Decoder;
pub use subtitles::{baseline, subtitles_for_group};
pub use tags::{AlternativeMedia, TagModel, VariantStream};

use crate::Result;

/// Turns raw playlist bytes into a [`TagModel`]
pub trait PlaylistDecoder: Send + Sync {
    fn decode(&self, raw: &[u8]) -> Result<TagModel>;
}
