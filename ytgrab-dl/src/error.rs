//! Error taxonomy for manifest fetching, selection and downloading.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Manifest advertises no audio-only stream
    #[error("no audio streams available in the manifest")]
    NoAudioStream,

    /// Manifest advertises no video-only stream
    #[error("no video streams available in the manifest")]
    NoVideoStream,

    /// Requested quality label matched no video stream
    #[error("no video stream matches the requested quality {0:?}")]
    NoMatchingStream(String),

    /// External transcoder is missing or unusable
    #[error("ffmpeg is required to mux the selected streams; install ffmpeg or point at a binary explicitly: {detail}")]
    TranscoderMissing { detail: String },

    /// External tool could not be started
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// External tool ran and reported failure
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailure {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    /// Info dump was not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type alias for ytgrab-dl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classify a failed tool run by inspecting its stderr.
///
/// A mention of "ffmpeg" (case-insensitive) is taken to mean the
/// transcoder is missing or unusable. Substring matching is brittle but
/// deliberately kept: the tool reports this condition only as prose.
/// Swap this function out if a structured error channel appears.
pub fn classify_tool_failure(tool: &str, status: ExitStatus, stderr: String) -> Error {
    let lowered = stderr.to_lowercase();
    if lowered.contains("ffmpeg") {
        let detail = stderr
            .lines()
            .find(|line| line.to_lowercase().contains("ffmpeg"))
            .unwrap_or("ffmpeg not found")
            .trim()
            .to_string();
        return Error::TranscoderMissing { detail };
    }

    Error::ToolFailure {
        tool: tool.to_string(),
        status,
        stderr: compact_stderr(&stderr),
    }
}

/// Keep the lines a user can act on; tool stderr is often pages long.
fn compact_stderr(stderr: &str) -> String {
    let important: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("ERROR:") || line.contains("HTTP Error"))
        .take(3)
        .collect();

    if !important.is_empty() {
        return important.join(" | ");
    }

    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("unknown error")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    fn failed_status() -> ExitStatus {
        // Portable way to obtain a non-zero ExitStatus.
        Command::new("false")
            .status()
            .expect("false should be runnable")
    }

    #[test]
    fn ffmpeg_mention_classifies_as_transcoder_missing() {
        let stderr = "ERROR: ffmpeg not found. Please install or provide the path".to_string();
        let err = classify_tool_failure("yt-dlp", failed_status(), stderr);

        assert!(matches!(err, Error::TranscoderMissing { .. }));
        assert!(err.to_string().contains("install ffmpeg"));
    }

    #[test]
    fn classification_is_case_insensitive() {
        let stderr = "ERROR: FFmpeg is needed for merging formats".to_string();
        let err = classify_tool_failure("yt-dlp", failed_status(), stderr);

        assert!(matches!(err, Error::TranscoderMissing { .. }));
    }

    #[test]
    fn other_failures_stay_unclassified() {
        let stderr = "ERROR: [youtube] xyz: Video unavailable".to_string();
        let err = classify_tool_failure("yt-dlp", failed_status(), stderr);

        match err {
            Error::ToolFailure { tool, stderr, .. } => {
                assert_eq!(tool, "yt-dlp");
                assert!(stderr.contains("Video unavailable"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn compact_stderr_prefers_error_lines() {
        let stderr = "WARNING: something\nERROR: real problem\ntrailing noise";
        assert_eq!(compact_stderr(stderr), "ERROR: real problem");
    }

    #[test]
    fn compact_stderr_falls_back_to_last_line() {
        let stderr = "line one\nline two\n\n";
        assert_eq!(compact_stderr(stderr), "line two");
    }
}
