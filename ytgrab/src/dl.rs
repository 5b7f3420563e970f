//! Download pipeline: resolve, select, download, mux.

use std::io::stdout;
use std::path::PathBuf;

use colored::Colorize;
use ytgrab_dl::client::{Container, DownloadRequest, Preset, YtDlp};
use ytgrab_dl::error::Result;
use ytgrab_dl::select::select_streams;

use crate::bar::ProgressBar;
use crate::cli::Config;

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(link = config.link, "starting download");

    let client = YtDlp::new().with_ffmpeg(config.ffmpeg.clone());

    println!("Accessing video...");
    let manifest = client.fetch_manifest(&config.link)?;
    println!("{}", format!("Found video:\n{}", manifest.title).green());

    println!("Getting video stream...");
    let streams = select_streams(&manifest, config.resolution.as_deref())?;
    tracing::debug!(
        audio = streams.audio.format_id,
        video = streams.video.format_id,
        "streams selected"
    );

    let container = Container::WebM;
    let request = DownloadRequest {
        audio_format_id: streams.audio.format_id.clone(),
        video_format_id: streams.video.format_id.clone(),
        output: resolve_output_path(&config.output, container.as_arg()),
        container,
        preset: Preset::Fast,
    };

    let mut bar = ProgressBar::new(stdout());
    client.download(&config.link, &request, |fraction| {
        // A broken stdout should not abort the transfer.
        let _ = bar.update(fraction);
    })?;

    println!("{}", "Video downloaded".green());
    Ok(())
}

/// Expand the output option into a concrete path.
///
/// An empty option falls back to `./video.<ext>`; otherwise every
/// `{{EXT}}` placeholder is replaced with the container extension.
fn resolve_output_path(output: &str, ext: &str) -> PathBuf {
    if output.is_empty() {
        return PathBuf::from(format!("./video.{ext}"));
    }

    PathBuf::from(output.replace("{{EXT}}", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_defaults_next_to_the_tool() {
        assert_eq!(resolve_output_path("", "webm"), PathBuf::from("./video.webm"));
    }

    #[test]
    fn placeholder_expands_to_the_container_extension() {
        assert_eq!(
            resolve_output_path("clip.{{EXT}}", "webm"),
            PathBuf::from("clip.webm")
        );
    }

    #[test]
    fn placeholder_expands_anywhere_in_the_path() {
        assert_eq!(
            resolve_output_path("out_{{EXT}}.mkv", "webm"),
            PathBuf::from("out_webm.mkv")
        );
    }

    #[test]
    fn paths_without_placeholder_pass_through() {
        assert_eq!(
            resolve_output_path("/tmp/movie.webm", "webm"),
            PathBuf::from("/tmp/movie.webm")
        );
    }
}
