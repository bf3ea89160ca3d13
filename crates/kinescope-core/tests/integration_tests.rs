//! Integration tests for Kinescope Core

use kinescope_core::{
    ingest,
    playlist::{baseline, url::resolve, AlternativeMedia, VariantStream},
    Error, EventLog, M3u8Decoder, PlaybackTelemetry, PlaylistDecoder, Resolution, Subtitle,
    TagModel, TelemetryConfig, TelemetryEvent,
};

const BASE: &str = "https://cdn.example/videos/master.m3u8";

// =============================================================================
// Playlist Ingestion Tests
// =============================================================================

const MASTER: &str = r##"#EXTM3U
#EXT-X-VERSION:6
#EXT-X-INDEPENDENT-SEGMENTS
#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="subs-hd",NAME="English",LANGUAGE="en",URI="subs/en.m3u8"
#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="subs-hd",NAME="Русский",LANGUAGE="ru",URI="subs/ru.m3u8"
#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="subs-hd",NAME="Deutsch",LANGUAGE="de",URI="subs/de.m3u8"
#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="subs-sd",NAME="English",LANGUAGE="EN",URI="/subs/en-sd.m3u8"
#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="subs-sd",NAME="Русский",LANGUAGE="rus",URI="https://subs.example/ru.m3u8"
#EXT-X-STREAM-INF:BANDWIDTH=5000000,RESOLUTION=1920x1080,CODECS="avc1.640028,mp4a.40.2",SUBTITLES="subs-hd"
1080p/index.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2800000,RESOLUTION=1280x720,CODECS="avc1.64001f,mp4a.40.2",SUBTITLES="subs-hd"
720p/index.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2000000,RESOLUTION=1280x720,CODECS="hvc1.1.6.L93.B0",SUBTITLES="subs-hd"
720p-hevc/index.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360,CODECS="avc1.42c01e",SUBTITLES="subs-sd"
https://edge.example/360p/index.m3u8
"##;

#[test]
fn test_end_to_end_master_playlist() {
    let tags = M3u8Decoder::new().decode(MASTER.as_bytes()).unwrap();
    let video = ingest(&tags, BASE);

    assert_eq!(video.qualities(), vec!["1080p", "720p", "360p"]);

    let hd = video.asset("720p").unwrap();
    assert_eq!(hd.url, "https://cdn.example/videos/720p/index.m3u8");
    assert_eq!(hd.resolution, "1280x720");
    assert_eq!(hd.file_type, "mp4");
    assert_eq!(hd.subtitles.len(), 3);

    let sd = video.asset("360p").unwrap();
    assert_eq!(sd.url, "https://edge.example/360p/index.m3u8");
    assert_eq!(sd.file_type, "");
    assert_eq!(sd.subtitles.len(), 2);
    assert_eq!(sd.subtitles[0].url, "https://cdn.example/videos/subs/en-sd.m3u8");

    // The SD rendition has the smallest offering; both of its tracks exist in HD
    let languages: Vec<_> = video.subtitles.iter().map(Subtitle::title).collect();
    assert_eq!(languages, vec!["English", "Russian"]);
    assert_eq!(video.subtitles[1].url, "https://subs.example/ru.m3u8");

    assert!(video.id.is_empty());
    assert_eq!(video.hls_link, BASE);
}

#[test]
fn test_simple_playlist_without_resolution() {
    let playlist = "#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=1000000
stream.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=500000
stream-low.m3u8
";
    let tags = M3u8Decoder::new().decode(playlist.as_bytes()).unwrap();
    let video = ingest(&tags, BASE);

    assert_eq!(video.assets.len(), 1);
    assert_eq!(video.assets[0].quality, "");
    assert_eq!(video.assets[0].url, "https://cdn.example/videos/stream.m3u8");
    assert!(video.subtitles.is_empty());
}

#[test]
fn test_decode_failure() {
    let err = M3u8Decoder::new().decode(b"<html>404</html>").unwrap_err();
    assert!(matches!(err, Error::PlaylistDecode(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn test_duplicate_quality_from_synthetic_tags() {
    let mut tags = TagModel::new();
    for uri in ["first.m3u8", "second.m3u8"] {
        tags.push_variant(
            VariantStream {
                resolution: Some(Resolution::new(1280, 720)),
                ..Default::default()
            },
            uri,
        );
    }
    tags.media.push(AlternativeMedia {
        group_id: "unused".into(),
        language: Some("en".into()),
        name: "English".into(),
        uri: Some("en.m3u8".into()),
    });

    let video = ingest(&tags, BASE);
    assert_eq!(video.assets.len(), 1);
    assert_eq!(video.assets[0].url, "https://cdn.example/videos/first.m3u8");
}

#[test]
fn test_resolve_scenarios() {
    assert_eq!(
        resolve("subs/en.m3u8", BASE).unwrap(),
        "https://cdn.example/videos/subs/en.m3u8"
    );
    assert_eq!(
        resolve("http://mirror.example/x.m3u8", BASE).unwrap(),
        "http://mirror.example/x.m3u8"
    );
    for path in ["a.m3u8", "deep/nested/b.m3u8", "/c.m3u8"] {
        let resolved = resolve(path, BASE).unwrap();
        assert!(resolved.starts_with("https://cdn.example/videos/"), "{}", resolved);
    }
}

#[test]
fn test_baseline_identical_lists() {
    let list = vec![
        Subtitle::new("English", "en", "https://cdn.example/en.m3u8"),
        Subtitle::new("Français", "fr", "https://cdn.example/fr.m3u8"),
    ];
    assert_eq!(baseline(&[list.clone(), list.clone()]), list);
}

// =============================================================================
// Telemetry Tests
// =============================================================================

#[test]
fn test_telemetry_session_scenario() {
    let config = TelemetryConfig { view_threshold_secs: 4 };
    let mut telemetry = PlaybackTelemetry::from_config(100, &config, Vec::new());

    for second in [0, 1, 2, 3, 4, 3, 5] {
        telemetry.register(second);
    }
    telemetry.stop_buffering();

    let events = telemetry.into_sink();
    let expected = vec![
        TelemetryEvent::UniqueSecondsUpdated { count: 1 },
        TelemetryEvent::PlaybackHeartbeat { second: 0 },
        TelemetryEvent::UniqueSecondsUpdated { count: 2 },
        TelemetryEvent::UniqueSecondsUpdated { count: 3 },
        TelemetryEvent::UniqueSecondsUpdated { count: 4 },
        TelemetryEvent::ViewThresholdReached,
        TelemetryEvent::UniqueSecondsUpdated { count: 5 },
        TelemetryEvent::UniqueSecondsUpdated { count: 6 },
        TelemetryEvent::PlaybackHeartbeat { second: 5 },
    ];
    assert_eq!(events, expected);
}

#[test]
fn test_independent_sessions() {
    let mut first = PlaybackTelemetry::new(600, 2, EventLog::new());
    let mut second = PlaybackTelemetry::new(600, 2, EventLog::new());

    first.register(0);
    first.register(1);
    second.register(0);

    assert!(first.view_reached());
    assert!(!second.view_reached());
    assert_ne!(first.sink().session_id(), second.sink().session_id());
    assert_eq!(first.step(), 12);
}
