//! Configuration for building a result formatter.
//!
//! This module contains the format selection and print width that control
//! how results are laid out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::FormatError;
use crate::output::{build_formatter, ResultFormatter};

/// Print width used when none is given
pub const DEFAULT_WIDTH: usize = 100;

/// Smallest print width that still leaves room for both columns of a
/// key/value row
pub const MIN_WIDTH: usize = 4;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain fixed-width text
    #[default]
    Console,
    /// XHTML markup
    Html,
    /// JSON documents
    Json,
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "html" | "xhtml" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FormatError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Console => "console",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Options for building a formatter.
///
/// ```rust
/// use shellfmtlib::{FormatOptions, OutputFormat, ResultFormatter, Row};
///
/// let mut out = Vec::new();
/// let mut formatter = FormatOptions::new()
///     .format(OutputFormat::Console)
///     .width(20)
///     .build(&mut out)
///     .unwrap();
/// formatter.row(&Row::from(vec!["hello"])).unwrap();
/// assert_eq!(formatter.row_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Output format
    pub format: OutputFormat,
    /// Maximum print width in characters
    pub width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            width: DEFAULT_WIDTH,
        }
    }
}

impl FormatOptions {
    /// Create options with console output at the default width
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder: set print width
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Build a formatter writing to `sink`.
    pub fn build<'a, W: Write + 'a>(
        &self,
        sink: W,
    ) -> crate::Result<Box<dyn ResultFormatter + 'a>> {
        build_formatter(self.format, sink, self.width)
    }
}
