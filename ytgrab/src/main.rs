//! ytgrab CLI - single-video YouTube downloader

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use ytgrab::cli::{Cli, Config};
use ytgrab::{dl, exit};

fn main() {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            std::process::exit(exit::USAGE);
        }
    };

    if let Err(error) = dl::execute(config) {
        eprintln!("{}", error.to_string().red());
        std::process::exit(exit::code_for(&error));
    }
}
