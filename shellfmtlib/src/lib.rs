//! # shellfmtlib
//!
//! Fixed-width result formatting for interactive database shells.
//!
//! ## Overview
//!
//! A database shell hands every result (status messages, single cells,
//! column/value pairs, scanned rows) to a formatter that writes plain text
//! to a console stream. This library provides that formatter:
//!
//! - **Plain lines**: status messages padded to the print width
//! - **Single values**: escaped and wrapped across the full width
//! - **Key/value pairs**: two aligned columns, each wrapped independently
//! - **Wide rows**: three or more values printed space-separated
//!
//! Column widths derive solely from the print width fixed at construction.
//! Output is plain text: no colors, no markup.
//!
//! ## Example
//!
//! ```rust
//! use shellfmtlib::{ConsoleFormatter, ResultFormatter, Row, Value};
//! use std::time::Instant;
//!
//! let mut out = Vec::new();
//! let mut formatter = ConsoleFormatter::new(&mut out, 40).unwrap();
//! let start = Instant::now();
//!
//! formatter.header(&["COLUMN".to_string(), "CELL".to_string()]).unwrap();
//! formatter.row(&Row::from(vec!["info:regioninfo", "NAME => 'table1'"])).unwrap();
//! formatter.row(&Row::TwoColumn(Value::from("info:server"), Value::from(60020))).unwrap();
//! formatter.footer(Some(start)).unwrap();
//!
//! assert_eq!(formatter.row_count(), 2);
//! ```

pub mod error;
pub mod options;
pub mod output;
pub mod value;

pub use error::FormatError;
pub use options::{FormatOptions, OutputFormat, DEFAULT_WIDTH, MIN_WIDTH};
pub use output::{build_formatter, ConsoleFormatter, ResultFormatter};
pub use value::{Row, Value};

/// Result type for shellfmtlib operations
pub type Result<T> = std::result::Result<T, FormatError>;
