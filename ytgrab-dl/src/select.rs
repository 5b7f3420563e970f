//! Stream-selection policy: quality heuristics over a manifest.
//!
//! Audio picks the highest bitrate; video picks either the highest
//! quality by (height, fps, total bitrate) or the first exact match on a
//! requested quality label. All ties resolve to the first descriptor in
//! manifest order, which makes selection deterministic for a fixed dump.

use crate::error::{Error, Result};
use crate::manifest::{StreamDescriptor, StreamManifest};

/// The audio and video variants chosen for one download.
#[derive(Debug, Clone, Copy)]
pub struct SelectedStreams<'a> {
    pub audio: &'a StreamDescriptor,
    pub video: &'a StreamDescriptor,
}

/// Apply the selection policy to a manifest.
///
/// With no requested resolution the best video stream wins; with one, the
/// label must match exactly (case-sensitive) or the selection fails with
/// [`Error::NoMatchingStream`].
pub fn select_streams<'a>(
    manifest: &'a StreamManifest,
    resolution: Option<&str>,
) -> Result<SelectedStreams<'a>> {
    let audio = best_audio(manifest).ok_or(Error::NoAudioStream)?;

    let video = match resolution {
        None => best_video(manifest).ok_or(Error::NoVideoStream)?,
        Some(label) => video_by_label(manifest, label)
            .ok_or_else(|| Error::NoMatchingStream(label.to_string()))?,
    };

    Ok(SelectedStreams { audio, video })
}

/// Highest audio bitrate among audio-only streams; unknown bitrates rank
/// lowest and ties keep the first descriptor in manifest order.
pub fn best_audio(manifest: &StreamManifest) -> Option<&StreamDescriptor> {
    max_first(manifest.audio_streams(), |s| s.abr.unwrap_or(0.0))
}

/// Highest quality among video-only streams, ordered by height, then
/// frame rate, then total bitrate.
pub fn best_video(manifest: &StreamManifest) -> Option<&StreamDescriptor> {
    max_first(manifest.video_streams(), |s| {
        (s.height.unwrap_or(0), s.fps.unwrap_or(0.0), s.tbr.unwrap_or(0.0))
    })
}

/// First video-only stream whose quality label equals `label` exactly.
pub fn video_by_label<'a>(
    manifest: &'a StreamManifest,
    label: &str,
) -> Option<&'a StreamDescriptor> {
    manifest
        .video_streams()
        .find(|s| s.format_note.as_deref() == Some(label))
}

/// Maximum by key where only a strictly greater key replaces the current
/// best, so the first of equals wins.
fn max_first<'a, K, F>(
    streams: impl Iterator<Item = &'a StreamDescriptor>,
    key: F,
) -> Option<&'a StreamDescriptor>
where
    F: Fn(&StreamDescriptor) -> K,
    K: PartialOrd,
{
    streams.fold(None, |best, item| match best {
        Some(current) if key(item) <= key(current) => Some(current),
        _ => Some(item),
    })
}
