//! JSON-line row input.
//!
//! Each non-blank line is one row: a JSON string becomes a plain status
//! line, a JSON array of scalars becomes a row shaped by its length.

use serde::Deserialize;
use shellfmtlib::{FormatError, Row, Value};
use std::io::BufRead;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputRow {
    Line(String),
    Values(Vec<Value>),
}

impl From<InputRow> for Row {
    fn from(input: InputRow) -> Self {
        match input {
            InputRow::Line(text) => Row::Scalar(text),
            InputRow::Values(values) => Row::from_values(values),
        }
    }
}

/// Parse one input line; blank lines yield `None`.
pub fn parse_row(line: usize, text: &str) -> Result<Option<Row>, FormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let input: InputRow =
        serde_json::from_str(trimmed).map_err(|e| FormatError::InvalidInput {
            line,
            message: e.to_string(),
        })?;
    Ok(Some(input.into()))
}

/// Stream rows from `reader` as they arrive, numbering lines from 1.
pub fn rows<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Row, FormatError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) => parse_row(index + 1, &text).transpose(),
            Err(e) => Some(Err(FormatError::Io(e))),
        })
}
