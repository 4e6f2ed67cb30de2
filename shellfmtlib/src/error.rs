//! Error types for shellfmtlib

use thiserror::Error;

use crate::options::OutputFormat;

/// Errors that can occur while building or driving a result formatter
#[derive(Error, Debug)]
pub enum FormatError {
    /// Print width too small to lay out a two-column row
    #[error("invalid print width {width}: must be at least {min}")]
    InvalidWidth { width: usize, min: usize },

    /// Unknown output format name
    #[error("unsupported format '{0}'")]
    UnsupportedFormat(String),

    /// Output format is declared but has no renderer yet
    #[error("format '{0}' is not yet implemented")]
    NotImplemented(OutputFormat),

    /// A line of row input could not be decoded
    #[error("invalid row input on line {line}: {message}")]
    InvalidInput { line: usize, message: String },

    /// Writing to the sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
