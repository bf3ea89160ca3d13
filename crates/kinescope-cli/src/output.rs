//! Output formatting for CLI

use console::style;
use kinescope_core::{TelemetryEvent, TelemetryRecord, Video};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Output format options
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Tabled)]
struct AssetRow<'a> {
    #[tabled(rename = "Quality")]
    quality: &'a str,
    #[tabled(rename = "Resolution")]
    resolution: &'a str,
    #[tabled(rename = "Type")]
    file_type: &'a str,
    #[tabled(rename = "Subtitles")]
    subtitles: usize,
    #[tabled(rename = "URL")]
    url: &'a str,
}

#[derive(Tabled)]
struct SubtitleRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Name")]
    description: String,
    #[tabled(rename = "URL")]
    url: String,
}

fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Print an ingested video
pub fn print_video(video: &Video, format: &str) -> anyhow::Result<()> {
    if let OutputFormat::Json = OutputFormat::from(format) {
        return print_json(video);
    }

    println!("{} {}", style("Playlist:").bold(), video.hls_link);

    println!("\n{} ({})", style("Assets").bold(), video.assets.len());
    let rows: Vec<_> = video
        .assets
        .iter()
        .map(|a| AssetRow {
            quality: or_dash(&a.quality),
            resolution: or_dash(&a.resolution),
            file_type: or_dash(&a.file_type),
            subtitles: a.subtitles.len(),
            url: &a.url,
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    println!("\n{} ({})", style("Subtitles").bold(), video.subtitles.len());
    if video.subtitles.is_empty() {
        println!("  {}", style("no subtitles shared by every rendition").dim());
    } else {
        let rows: Vec<_> = video
            .subtitles
            .iter()
            .map(|s| SubtitleRow {
                title: s.title(),
                language: s.language.clone(),
                description: s.description.clone(),
                url: s.url.clone(),
            })
            .collect();
        println!("{}", Table::new(rows).with(Style::rounded()));
    }

    Ok(())
}

/// Session state after a telemetry replay
#[derive(Debug, Serialize)]
pub struct TelemetrySummary {
    pub step: u64,
    pub unique_seconds: usize,
    pub view_reached: bool,
}

#[derive(Serialize)]
struct TelemetryReport<'a> {
    summary: &'a TelemetrySummary,
    events: &'a [TelemetryRecord],
}

/// Print a telemetry replay
pub fn print_telemetry(
    summary: &TelemetrySummary,
    records: &[TelemetryRecord],
    format: &str,
) -> anyhow::Result<()> {
    if let OutputFormat::Json = OutputFormat::from(format) {
        return print_json(&TelemetryReport {
            summary,
            events: records,
        });
    }

    for record in records {
        let line = match &record.event {
            TelemetryEvent::UniqueSecondsUpdated { count } => format!("unique seconds: {}", count),
            TelemetryEvent::ViewThresholdReached => style("view threshold reached").green().to_string(),
            TelemetryEvent::PlaybackHeartbeat { second } => format!("heartbeat at {}s", second),
            TelemetryEvent::BufferingDuration { seconds } => {
                style(format!("buffered for {:.3}s", seconds)).yellow().to_string()
            }
        };
        println!("{:>4}  {}", record.sequence, line);
    }

    println!(
        "\n{} step={}s unique={} view={}",
        style("Summary:").bold(),
        summary.step,
        summary.unique_seconds,
        summary.view_reached
    );

    Ok(())
}
