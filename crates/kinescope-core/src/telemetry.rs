//! Playback telemetry
//!
//! Turns the player clock's "current second" samples into analytics events:
//! - unique seconds watched
//! - view threshold reached (once per session)
//! - playback heartbeats at a step proportional to the video duration
//! - buffering durations
//!
//! A [`PlaybackTelemetry`] belongs to exactly one playback and is driven from
//! one thread; all mutation goes through `&mut self`.

use crate::config::TelemetryConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Shortest heartbeat step in seconds
pub const MIN_STEP: u64 = 5;
/// Longest heartbeat step in seconds
pub const MAX_STEP: u64 = 60;

/// Telemetry event types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A second was watched for the first time
    UniqueSecondsUpdated { count: usize },

    /// Enough unique seconds were watched to count a view
    ViewThresholdReached,

    /// Playback moved at least one step away from the previous heartbeat
    PlaybackHeartbeat { second: u64 },

    /// Buffering finished
    BufferingDuration { seconds: f64 },
}

/// Receives telemetry events synchronously, in emission order
pub trait TelemetrySink {
    fn emit(&mut self, event: TelemetryEvent);
}

impl<F: FnMut(TelemetryEvent)> TelemetrySink for F {
    fn emit(&mut self, event: TelemetryEvent) {
        self(event)
    }
}

impl TelemetrySink for Vec<TelemetryEvent> {
    fn emit(&mut self, event: TelemetryEvent) {
        self.push(event);
    }
}

/// Telemetry event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Unique event ID
    pub id: Uuid,
    /// Playback session ID
    pub session_id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Position of the event within its session, starting at 1
    pub sequence: u64,
    #[serde(flatten)]
    pub event: TelemetryEvent,
}

/// Sink that stamps and keeps every event of one session
#[derive(Debug, Clone)]
pub struct EventLog {
    session_id: Uuid,
    records: Vec<TelemetryRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            records: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    /// Take all records, leaving the log empty
    pub fn drain(&mut self) -> Vec<TelemetryRecord> {
        std::mem::take(&mut self.records)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySink for EventLog {
    fn emit(&mut self, event: TelemetryEvent) {
        let sequence = self.records.last().map_or(1, |r| r.sequence + 1);
        self.records.push(TelemetryRecord {
            id: Uuid::new_v4(),
            session_id: self.session_id,
            timestamp: Utc::now(),
            sequence,
            event,
        });
    }
}

/// Heartbeat step for a video of `duration` seconds: 2% of it, within
/// [`MIN_STEP`]..=[`MAX_STEP`]
pub fn playback_step(duration: u64) -> u64 {
    (duration / 50).clamp(MIN_STEP, MAX_STEP)
}

/// Telemetry state machine for one playback session
#[derive(Debug)]
pub struct PlaybackTelemetry<S> {
    step: u64,
    view_threshold: u64,
    unique_seconds: HashSet<u64>,
    view_reached: bool,
    last_heartbeat: Option<u64>,
    buffering_start: Option<Instant>,
    sink: S,
}

impl<S: TelemetrySink> PlaybackTelemetry<S> {
    /// `duration` and `view_threshold` are in seconds
    pub fn new(duration: u64, view_threshold: u64, sink: S) -> Self {
        Self {
            step: playback_step(duration),
            view_threshold,
            unique_seconds: HashSet::new(),
            view_reached: false,
            last_heartbeat: None,
            buffering_start: None,
            sink,
        }
    }

    pub fn from_config(duration: u64, config: &TelemetryConfig, sink: S) -> Self {
        Self::new(duration, config.view_threshold_secs, sink)
    }

    /// Record that playback is at `second`
    pub fn register(&mut self, second: u64) {
        if self.unique_seconds.insert(second) {
            self.emit(TelemetryEvent::UniqueSecondsUpdated {
                count: self.unique_seconds.len(),
            });

            if !self.view_reached && self.unique_seconds.len() as u64 >= self.view_threshold {
                self.view_reached = true;
                self.emit(TelemetryEvent::ViewThresholdReached);
            }
        }

        if self.heartbeat_due(second) {
            self.last_heartbeat = Some(second);
            self.emit(TelemetryEvent::PlaybackHeartbeat { second });
        }
    }

    /// Heartbeats fire on the first sample, then whenever playback moves a
    /// full step away from the last heartbeat in either direction.
    fn heartbeat_due(&self, second: u64) -> bool {
        let Some(last) = self.last_heartbeat else {
            return true;
        };
        let forward = second >= last.saturating_add(self.step);
        let backward = last.checked_sub(self.step).is_some_and(|prev| second <= prev);
        forward || backward
    }

    /// Mark the start of buffering, replacing any start already recorded
    pub fn start_buffering(&mut self) {
        self.start_buffering_at(Instant::now());
    }

    pub fn start_buffering_at(&mut self, at: Instant) {
        self.buffering_start = Some(at);
    }

    /// Mark the end of buffering. Does nothing if buffering never started.
    pub fn stop_buffering(&mut self) {
        self.stop_buffering_at(Instant::now());
    }

    pub fn stop_buffering_at(&mut self, at: Instant) {
        let Some(start) = self.buffering_start.take() else {
            return;
        };
        let seconds = at.saturating_duration_since(start).as_secs_f64();
        self.emit(TelemetryEvent::BufferingDuration { seconds });
    }

    fn emit(&mut self, event: TelemetryEvent) {
        debug!(?event, "Telemetry event");
        self.sink.emit(event);
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn view_threshold(&self) -> u64 {
        self.view_threshold
    }

    /// Number of distinct seconds watched so far
    pub fn unique_seconds(&self) -> usize {
        self.unique_seconds.len()
    }

    pub fn view_reached(&self) -> bool {
        self.view_reached
    }

    pub fn is_buffering(&self) -> bool {
        self.buffering_start.is_some()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// End the session and hand back the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
