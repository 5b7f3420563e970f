//! Driver for the yt-dlp executable.
//!
//! Two operations: fetch the stream manifest as a JSON dump, and run a
//! download with line-buffered progress piped back through a callback.

use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::error::{classify_tool_failure, Error, Result};
use crate::manifest::StreamManifest;
use crate::progress::{parse_line, ProgressTracker};

/// Output container the selected streams are muxed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    WebM,
}

impl Container {
    pub fn as_arg(self) -> &'static str {
        match self {
            Container::WebM => "webm",
        }
    }
}

/// Transcoder speed/size trade-off applied during muxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Fast,
}

impl Preset {
    /// Postprocessor argument forwarding the preset to ffmpeg.
    pub fn as_postprocessor_args(self) -> &'static str {
        match self {
            Preset::Fast => "Merger+ffmpeg:-preset fast",
        }
    }
}

/// Everything needed to run one muxed download.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub audio_format_id: String,
    pub video_format_id: String,
    pub output: PathBuf,
    pub container: Container,
    pub preset: Preset,
}

/// Handle on the yt-dlp executable, with an optional ffmpeg override.
#[derive(Debug, Clone)]
pub struct YtDlp {
    executable: PathBuf,
    ffmpeg: Option<PathBuf>,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlp {
    /// Use `yt-dlp` from the search path.
    pub fn new() -> Self {
        Self {
            executable: PathBuf::from("yt-dlp"),
            ffmpeg: None,
        }
    }

    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Point the downloader at a specific ffmpeg binary instead of the
    /// one on the search path.
    pub fn with_ffmpeg(mut self, ffmpeg: Option<PathBuf>) -> Self {
        self.ffmpeg = ffmpeg;
        self
    }

    /// Fetch the stream manifest for a single video.
    pub fn fetch_manifest(&self, link: &str) -> Result<StreamManifest> {
        debug!(link, "fetching stream manifest");

        let output = Command::new(&self.executable)
            .args(["--dump-json", "--no-playlist", "--no-warnings", link])
            .output()
            .map_err(|source| Error::Spawn {
                tool: self.tool_name(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(classify_tool_failure(
                &self.tool_name(),
                output.status,
                stderr,
            ));
        }

        let manifest: StreamManifest = serde_json::from_slice(&output.stdout)?;
        debug!(
            id = %manifest.id,
            formats = manifest.formats.len(),
            "manifest fetched"
        );
        Ok(manifest)
    }

    /// Download and mux the requested streams, reporting overall progress
    /// as a fraction in [0, 1]. The callback sees a non-decreasing series
    /// and receives exactly 1.0 once the process has exited successfully.
    pub fn download<F>(&self, link: &str, request: &DownloadRequest, mut progress: F) -> Result<()>
    where
        F: FnMut(f64),
    {
        let format = format!("{}+{}", request.video_format_id, request.audio_format_id);
        debug!(link, %format, output = %request.output.display(), "starting download");

        let mut command = Command::new(&self.executable);
        command
            .arg("-f")
            .arg(&format)
            .args(["--no-playlist", "--no-warnings", "--newline"])
            .args(["--merge-output-format", request.container.as_arg()])
            .args(["--ppa", request.preset.as_postprocessor_args()])
            .arg("-o")
            .arg(&request.output);

        if let Some(ffmpeg) = &self.ffmpeg {
            command.arg("--ffmpeg-location").arg(ffmpeg);
        }

        let mut child = command
            .arg(link)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                tool: self.tool_name(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("child stdout not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::other("child stderr not captured"))?;

        // Drain stderr on a separate thread so the child never blocks on a
        // full pipe while we read stdout.
        let stderr_reader = thread::spawn(move || {
            let mut buffer = String::new();
            let mut reader = BufReader::new(stderr);
            if let Err(error) = reader.read_to_string(&mut buffer) {
                warn!(%error, "failed to drain tool stderr");
            }
            buffer
        });

        // Video transfers first, then audio.
        let mut tracker = ProgressTracker::new(2);
        for line in BufReader::new(stdout).lines().map_while(|l| l.ok()) {
            if let Some(event) = parse_line(&line) {
                progress(tracker.observe(event));
            }
        }

        let status = child.wait()?;
        let stderr = stderr_reader.join().unwrap_or_default();

        if !status.success() {
            return Err(classify_tool_failure(&self.tool_name(), status, stderr));
        }

        progress(tracker.finish());
        Ok(())
    }

    fn tool_name(&self) -> String {
        self.executable
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.executable.display().to_string())
    }
}
