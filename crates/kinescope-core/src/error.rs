//! Error types for Kinescope Core

use thiserror::Error;

/// Result type alias for playback operations
pub type Result<T> = std::result::Result<T, Error>;

/// Playback core error types
#[derive(Error, Debug)]
pub enum Error {
    // Playlist errors
    #[error("Failed to resolve media path '{path}': {reason}")]
    UrlResolution { path: String, reason: String },

    #[error("Invalid playlist URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch playlist: {0}")]
    PlaylistFetch(String),

    #[error("Failed to decode playlist: {0}")]
    PlaylistDecode(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Network errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    // Internal errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn url_resolution(path: &str, reason: impl Into<String>) -> Self {
        Error::UrlResolution {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true if retrying the same request may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::PlaylistFetch(_) | Error::Network(_))
    }

    /// Returns the error code for analytics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UrlResolution { .. } => "URL_RESOLUTION",
            Error::InvalidUrl(_) => "INVALID_URL",
            Error::PlaylistFetch(_) => "PLAYLIST_FETCH",
            Error::PlaylistDecode(_) => "PLAYLIST_DECODE",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Network(_) => "NETWORK",
            Error::Json(_) => "JSON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::PlaylistDecode("bad".into()).error_code(), "PLAYLIST_DECODE");
        assert_eq!(Error::url_resolution("", "empty").error_code(), "URL_RESOLUTION");
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::PlaylistFetch("timeout".into()).is_recoverable());
        assert!(!Error::PlaylistDecode("bad tag".into()).is_recoverable());
        assert!(!Error::InvalidUrl("nope".into()).is_recoverable());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: Error = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert_eq!(err.error_code(), "JSON");
        assert!(!err.is_recoverable());
    }
}
