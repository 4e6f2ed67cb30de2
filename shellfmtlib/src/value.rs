//! Cell values and row shapes handed to a formatter.
//!
//! A [`Row`] is decided once at the call boundary: the caller (or an input
//! adapter) picks the shape, and the formatter only dispatches on the tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single displayable cell.
///
/// Deserializes from plain JSON scalars: `"abc"`, `42`, `1.5`, `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Free text; escaped before layout
    Text(String),
    /// Whole number; rendered in decimal form, never escaped
    Integer(i64),
    /// Whole number above `i64::MAX`
    Unsigned(u64),
    /// Floating point number; `3.0` keeps its fraction, never escaped
    Float(f64),
    /// Boolean flag
    Bool(bool),
}

impl Value {
    /// Check if this value is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Integer(_) | Value::Unsigned(_) | Value::Float(_)
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Unsigned(u) => write!(f, "{}", u),
            // `3.0` keeps its fraction; huge magnitudes use exponents
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Value::Unsigned(u), Value::Integer)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// The shape of one logical result row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Row {
    /// Nothing to print; rendering is a no-op
    #[default]
    Empty,
    /// A plain status line, padded to the print width
    Scalar(String),
    /// One value wrapped across the full print width
    OneColumn(Value),
    /// Key/value pair laid out in two aligned columns
    TwoColumn(Value, Value),
    /// Three or more values printed space-separated on one line
    MultiColumn(Vec<Value>),
}

impl Row {
    /// Create a plain status line
    pub fn line(text: impl Into<String>) -> Self {
        Row::Scalar(text.into())
    }

    /// Pick the row shape from the number of values.
    pub fn from_values(mut values: Vec<Value>) -> Self {
        match values.len() {
            0 => Row::Empty,
            1 => Row::OneColumn(values.remove(0)),
            2 => {
                let second = values.remove(1);
                let first = values.remove(0);
                Row::TwoColumn(first, second)
            }
            _ => Row::MultiColumn(values),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Row {
    fn from(values: Vec<T>) -> Self {
        Row::from_values(values.into_iter().map(Into::into).collect())
    }
}
