//! Media URI resolution against the playlist location

use crate::{error::Error, Result};
use url::Url;

/// Resolve a media path found inside a playlist against the playlist URL.
///
/// Paths that already carry a scheme (a CDN override, for instance) are
/// returned verbatim. Anything else is appended to the directory of
/// `playlist_url`, after stripping one leading `/`. Dot segments are
/// normalized, so `../` climbs above that directory.
pub fn resolve(media_path: &str, playlist_url: &str) -> Result<String> {
    let base = Url::parse(playlist_url)
        .map_err(|e| Error::url_resolution(media_path, format!("invalid base URL: {}", e)))?;

    if media_path.is_empty() {
        return Err(Error::url_resolution(media_path, "empty media path"));
    }

    let relative = media_path.strip_prefix('/').unwrap_or(media_path);
    if relative.contains("://") {
        return Ok(relative.to_string());
    }

    // Joining "." drops the last path segment along with query and fragment
    let directory = base
        .join(".")
        .map_err(|e| Error::url_resolution(media_path, e.to_string()))?;

    let resolved = Url::parse(&format!("{}{}", directory, relative))
        .map_err(|e| Error::url_resolution(media_path, e.to_string()))?;

    Ok(resolved.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cdn.example/videos/master.m3u8";

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve("subs/en.m3u8", BASE).unwrap(),
            "https://cdn.example/videos/subs/en.m3u8"
        );
    }

    #[test]
    fn test_resolve_strips_one_leading_slash() {
        assert_eq!(
            resolve("/720p/index.m3u8", BASE).unwrap(),
            "https://cdn.example/videos/720p/index.m3u8"
        );
    }

    #[test]
    fn test_resolve_drops_base_query() {
        assert_eq!(
            resolve("720p.m3u8", "https://cdn.example/v/master.m3u8?token=abc").unwrap(),
            "https://cdn.example/v/720p.m3u8"
        );
    }

    #[test]
    fn test_resolve_keeps_media_query() {
        assert_eq!(
            resolve("720p.m3u8?sig=1", BASE).unwrap(),
            "https://cdn.example/videos/720p.m3u8?sig=1"
        );
    }

    #[test]
    fn test_resolve_normalizes_dot_segments() {
        assert_eq!(
            resolve("../other/a.m3u8", BASE).unwrap(),
            "https://cdn.example/other/a.m3u8"
        );
        assert_eq!(
            resolve("./720p/./index.m3u8", BASE).unwrap(),
            "https://cdn.example/videos/720p/index.m3u8"
        );
    }

    #[test]
    fn test_absolute_path_returned_verbatim() {
        let cdn = "https://other-cdn.example/a/b/720p.m3u8";
        assert_eq!(resolve(cdn, BASE).unwrap(), cdn);
    }

    #[test]
    fn test_resolve_base_at_host_root() {
        assert_eq!(
            resolve("index.m3u8", "https://cdn.example").unwrap(),
            "https://cdn.example/index.m3u8"
        );
    }

    #[test]
    fn test_empty_path_fails() {
        assert!(matches!(
            resolve("", BASE),
            Err(Error::UrlResolution { .. })
        ));
    }

    #[test]
    fn test_relative_base_fails() {
        assert!(resolve("subs/en.m3u8", "videos/master.m3u8").is_err());
        assert!(resolve("https://cdn.example/a.m3u8", "not a url").is_err());
    }
}
