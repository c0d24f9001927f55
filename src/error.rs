//! Error type for fishtree runs.
//!
//! Each variant's `Display` is the exact line printed to the user before the
//! process exits with status 1.

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagramError {
    /// No root directory argument was given.
    #[error("Provide directory to diagram")]
    MissingRoot,

    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(#[source] clap::Error),

    /// The depth argument is not an integer.
    #[error("Invalid maximum depth: {0}")]
    InvalidDepth(#[source] ParseIntError),

    /// The root path could not be made absolute.
    #[error("Invalid root directory: {0}")]
    InvalidRoot(#[source] io::Error),

    /// Listing the root's children failed.
    #[error("Error reading directory: {0}")]
    ReadRoot(#[source] io::Error),

    /// Rendering a subtree (or writing its output) failed.
    #[error("Error printing directory: {0}")]
    Render(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, DiagramError>;
