//! Error types for tsql-to-pg

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur at the I/O boundary of a conversion.
///
/// The conversion pipeline itself never fails; only reading the input script
/// and writing the generated DDL can.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read SQL file: {path}")]
    InputReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL file is not valid UTF-8, UTF-16 or Windows-1252 text: {path}")]
    InputDecodeError { path: PathBuf },

    #[error("Failed to write DDL to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
