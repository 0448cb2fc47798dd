//! Error types for the template assembler.
//!
//! Build-time I/O failures are fatal to the build step: the assembler aborts
//! and never leaves a partial output file behind.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while assembling the shell document.
#[derive(Error, Debug)]
pub enum AssembleError {
    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable input.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the unwritable output.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
