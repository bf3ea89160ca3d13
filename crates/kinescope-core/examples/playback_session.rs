//! Ingest a playlist body and drive a telemetry session for it
//!
//! Run with: cargo run -p kinescope-core --example playback_session

use kinescope_core::{
    ingest, M3u8Decoder, PlaybackTelemetry, PlaylistDecoder, TelemetryConfig, TelemetryEvent,
};

const MASTER: &str = r#"#EXTM3U
#EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="subs",NAME="English",LANGUAGE="en",URI="subs/en.m3u8"
#EXT-X-STREAM-INF:BANDWIDTH=2800000,RESOLUTION=1280x720,CODECS="avc1.64001f,mp4a.40.2",SUBTITLES="subs"
720p/index.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360,CODECS="avc1.42c01e,mp4a.40.2",SUBTITLES="subs"
360p/index.m3u8
"#;

fn main() -> kinescope_core::Result<()> {
    let tags = M3u8Decoder::new().decode(MASTER.as_bytes())?;
    let video = ingest(&tags, "https://cdn.example.com/videos/abc/master.m3u8");

    for asset in &video.assets {
        println!("{:>6}  {}", asset.quality, asset.url);
    }
    for subtitle in &video.subtitles {
        println!("subtitle: {} ({})", subtitle.title(), subtitle.url);
    }

    let mut telemetry = PlaybackTelemetry::from_config(
        600,
        &TelemetryConfig::default(),
        |event: TelemetryEvent| println!("event: {:?}", event),
    );
    for second in 0..40 {
        telemetry.register(second);
    }
    telemetry.start_buffering();
    telemetry.stop_buffering();

    Ok(())
}
