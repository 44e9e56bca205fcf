use std::{io, path::PathBuf};

use thiserror::Error;

/// Represents all errors that can stop the command line driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The input file could not be read.
    #[error("Failed to read the input file '{}'. Perhaps this file does not exist?", .path.display())]
    ReadFile {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("Failed to read the document from standard input: {0}")]
    ReadStdin(#[source] io::Error),
    /// A result could not be written to the output sink.
    #[error("Failed to write results: {0}")]
    Write(#[from] io::Error),
}
