//! Typed wrapper around the [yt-dlp](https://github.com/yt-dlp/yt-dlp)
//! executable for single-video downloads.
//!
//! yt-dlp owns the platform protocol, manifest retrieval and stream
//! transfer; ffmpeg owns the muxing. This crate contributes the typed
//! surface on top: a manifest model, a quality-selection policy, a
//! download driver with fractional progress, and an error taxonomy.
//!
//! ## Modules
//!
//! - [`manifest`] - stream manifest model from the info JSON dump
//! - [`select`] - audio/video selection policy
//! - [`client`] - yt-dlp process driver
//! - [`progress`] - progress-line parsing and aggregation
//! - [`error`] - error taxonomy
//!
//! ## Quick start
//!
//! ```no_run
//! use ytgrab_dl::client::{Container, DownloadRequest, Preset, YtDlp};
//! use ytgrab_dl::select::select_streams;
//!
//! # fn main() -> Result<(), ytgrab_dl::error::Error> {
//! let link = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
//! let client = YtDlp::new();
//!
//! let manifest = client.fetch_manifest(link)?;
//! let streams = select_streams(&manifest, None)?;
//!
//! let request = DownloadRequest {
//!     audio_format_id: streams.audio.format_id.clone(),
//!     video_format_id: streams.video.format_id.clone(),
//!     output: "video.webm".into(),
//!     container: Container::WebM,
//!     preset: Preset::Fast,
//! };
//!
//! client.download(link, &request, |fraction| {
//!     println!("{:.0}%", fraction * 100.0);
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod manifest;
pub mod progress;
pub mod select;
