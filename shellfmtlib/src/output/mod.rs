//! Output formatting: lay out result rows for display.
//!
//! Every output variant implements [`ResultFormatter`], a three-call
//! lifecycle driven once per result set:
//!
//! - **header**: optional column titles; resets the row counter
//! - **row**: one logical result row, possibly spanning several lines
//! - **footer**: row count and elapsed time, when a start time is given
//!
//! Only the plain console variant is implemented. HTML and JSON are
//! declared formats that [`build_formatter`] rejects.
//!
//! ## Example
//!
//! ```rust
//! use shellfmtlib::output::{ConsoleFormatter, ResultFormatter};
//! use shellfmtlib::Row;
//!
//! let mut out = Vec::new();
//! let mut formatter = ConsoleFormatter::new(&mut out, 20).unwrap();
//! formatter.header(&["COLUMN".to_string(), "CELL".to_string()]).unwrap();
//! formatter.row(&Row::from(vec!["info:name", "alice"])).unwrap();
//! formatter.footer(None).unwrap();
//! assert_eq!(formatter.row_count(), 1);
//! ```

pub mod console;
pub mod layout;

pub use console::ConsoleFormatter;

use std::io::Write;
use std::time::Instant;

use crate::error::FormatError;
use crate::options::OutputFormat;
use crate::value::Row;

/// Lifecycle shared by all result formatters.
pub trait ResultFormatter {
    /// Print column titles, if any, then reset the row counter.
    fn header(&mut self, titles: &[String]) -> crate::Result<()>;

    /// Print one row, optionally offset by a single space.
    fn row_with_inset(&mut self, row: &Row, inset: bool) -> crate::Result<()>;

    /// Print one inset row.
    fn row(&mut self, row: &Row) -> crate::Result<()> {
        self.row_with_inset(row, true)
    }

    /// Print the row count and elapsed time since `start`; nothing when
    /// `start` is `None`.
    fn footer(&mut self, start: Option<Instant>) -> crate::Result<()>;

    /// Rows printed since the last header
    fn row_count(&self) -> usize;

    /// Print width in characters
    fn max_width(&self) -> usize;
}

/// Build the formatter for `format`.
pub fn build_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    sink: W,
    width: usize,
) -> crate::Result<Box<dyn ResultFormatter + 'a>> {
    match format {
        OutputFormat::Console => Ok(Box::new(ConsoleFormatter::new(sink, width)?)),
        OutputFormat::Html | OutputFormat::Json => Err(FormatError::NotImplemented(format)),
    }
}
