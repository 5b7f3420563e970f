//! ytgrab - download a single YouTube video as WebM.
//!
//! The binary is a thin shell over [`ytgrab_dl`]: parse arguments into a
//! [`cli::Config`], run the [`dl::execute`] pipeline, and map the typed
//! errors onto process exit codes in [`exit`].

pub mod bar;
pub mod cli;
pub mod dl;
pub mod exit;
