//! Progress-line parsing and aggregation.
//!
//! The client prints one `[download]` line per update when run with
//! `--newline`. A muxed download transfers two streams back to back, so
//! raw percentages restart at zero halfway through; [`ProgressTracker`]
//! folds both transfers into a single monotonically non-decreasing
//! fraction in [0, 1].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PERCENT_RE: Regex = Regex::new(r"\[download\]\s+(\d+(?:\.\d+)?)%").unwrap();
    static ref DEST_RE: Regex = Regex::new(r"\[download\]\s+Destination:").unwrap();
    static ref MERGE_RE: Regex = Regex::new(r"\[Merger\]\s+Merging").unwrap();
    static ref ALREADY_RE: Regex = Regex::new(r"has already been downloaded").unwrap();
}

/// One observation parsed from a client output line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressEvent {
    /// Transfer fraction of the current stream, in [0, 1].
    Percent(f64),
    /// A new stream transfer is starting.
    StreamStart,
    /// All streams transferred; muxing in progress.
    Merging,
    /// The output already exists; nothing to transfer.
    AlreadyDone,
}

/// Parse a single client output line, if it carries progress.
pub fn parse_line(line: &str) -> Option<ProgressEvent> {
    if let Some(caps) = PERCENT_RE.captures(line) {
        let percent: f64 = caps[1].parse().ok()?;
        return Some(ProgressEvent::Percent(percent / 100.0));
    }
    if DEST_RE.is_match(line) {
        return Some(ProgressEvent::StreamStart);
    }
    if MERGE_RE.is_match(line) {
        return Some(ProgressEvent::Merging);
    }
    if ALREADY_RE.is_match(line) {
        return Some(ProgressEvent::AlreadyDone);
    }
    None
}

/// Folds per-stream progress events into one overall fraction.
///
/// The fraction never decreases; 1.0 is reported only via [`finish`],
/// after the client process has exited successfully.
///
/// [`finish`]: ProgressTracker::finish
#[derive(Debug)]
pub struct ProgressTracker {
    streams: usize,
    started: usize,
    last: f64,
}

/// Ceiling for observed fractions; 1.0 is reserved for [`ProgressTracker::finish`].
const OBSERVED_CAP: f64 = 0.99;

impl ProgressTracker {
    pub fn new(streams: usize) -> Self {
        Self {
            streams: streams.max(1),
            started: 0,
            last: 0.0,
        }
    }

    /// Feed one event; returns the overall fraction so far.
    pub fn observe(&mut self, event: ProgressEvent) -> f64 {
        let total = self.streams as f64;
        let raw = match event {
            ProgressEvent::StreamStart => {
                self.started += 1;
                (self.started - 1) as f64 / total
            }
            ProgressEvent::Percent(p) => {
                let completed = self.started.saturating_sub(1) as f64;
                (completed + p.clamp(0.0, 1.0)) / total
            }
            ProgressEvent::AlreadyDone => self.started.max(1) as f64 / total,
            // Mux duration is unknown; hold position until the process exits.
            ProgressEvent::Merging => self.last,
        };

        // The last stream's 100% line arrives while muxing is still ahead,
        // so observed values stop short of completion.
        self.last = self.last.max(raw.min(OBSERVED_CAP));
        self.last
    }

    /// Mark the whole download complete.
    pub fn finish(&mut self) -> f64 {
        self.last = 1.0;
        self.last
    }
}
