//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "ytgrab")]
#[command(about = "Download a single YouTube video as WebM")]
#[command(version)]
pub struct Cli {
    /// YouTube video link (required)
    #[arg(short, long, default_value_t)]
    pub link: String,

    /// Output path; {{EXT}} expands to the container extension
    #[arg(short, long, default_value_t)]
    pub output: String,

    /// Exact quality label to download, e.g. "720p"
    #[arg(short, long)]
    pub resolution: Option<String>,

    /// Path to the ffmpeg binary
    #[arg(long)]
    pub ffmpeg: Option<PathBuf>,
}

/// The link is the one argument the tool cannot invent a default for.
#[derive(Debug, Error)]
#[error("required video link\nytgrab -l [youtube video link]")]
pub struct MissingLink;

/// Validated configuration for one download run.
#[derive(Debug)]
pub struct Config {
    pub link: String,
    pub output: String,
    pub resolution: Option<String>,
    pub ffmpeg: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = MissingLink;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.link.trim().is_empty() {
            return Err(MissingLink);
        }

        Ok(Self {
            link: cli.link,
            output: cli.output,
            resolution: cli.resolution.filter(|r| !r.trim().is_empty()),
            ffmpeg: cli.ffmpeg,
        })
    }
}
