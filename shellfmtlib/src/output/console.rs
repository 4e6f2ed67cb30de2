//! Plain fixed-width console formatter.
//!
//! Rows are laid out according to their shape:
//!
//! ```text
//! plain status line, padded to the print width
//! a single value wrapped across the full width, continuing on
//! the next line when it is longer than the width
//!  key                        value wrapped in the second column,
//!                             continuation lines stay aligned
//!  v1 v2 v3 ...
//! 3 row(s) in 0.0123 seconds
//! ```
//!
//! Header rows are printed without the one-space inset, with an extra space
//! before the second column so both columns line up with the data rows.

use log::{debug, trace};
use std::io::Write;
use std::time::Instant;

use super::layout::{cell_text, pad, pair_widths, split, summary};
use super::ResultFormatter;
use crate::error::FormatError;
use crate::options::{DEFAULT_WIDTH, MIN_WIDTH};
use crate::value::{Row, Value};

/// Fixed-width text formatter writing to any [`Write`] sink.
///
/// The sink is never closed; pass `&mut W` to keep ownership, or take it
/// back with [`ConsoleFormatter::into_inner`].
#[derive(Debug)]
pub struct ConsoleFormatter<W: Write> {
    out: W,
    max_width: usize,
    row_count: usize,
}

impl<W: Write> ConsoleFormatter<W> {
    /// Create a formatter with the given print width.
    ///
    /// Fails with [`FormatError::InvalidWidth`] when `max_width` is below
    /// [`MIN_WIDTH`].
    pub fn new(out: W, max_width: usize) -> crate::Result<Self> {
        if max_width < MIN_WIDTH {
            return Err(FormatError::InvalidWidth {
                width: max_width,
                min: MIN_WIDTH,
            });
        }
        debug!("console formatter ready (width {})", max_width);
        Ok(Self {
            out,
            max_width,
            row_count: 0,
        })
    }

    /// Create a formatter with [`DEFAULT_WIDTH`]
    pub fn with_default_width(out: W) -> Self {
        Self {
            out,
            max_width: DEFAULT_WIDTH,
            row_count: 0,
        }
    }

    /// Give the sink back to the caller
    pub fn into_inner(self) -> W {
        self.out
    }

    fn output(&mut self, width: usize, text: &str) -> crate::Result<()> {
        self.out.write_all(pad(width, text).as_bytes())?;
        Ok(())
    }

    fn newline(&mut self) -> crate::Result<()> {
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn space(&mut self) -> crate::Result<()> {
        self.out.write_all(b" ")?;
        Ok(())
    }

    fn write_wrapped(&mut self, value: &Value) -> crate::Result<usize> {
        let width = self.max_width;
        let lines = split(width, &cell_text(value));
        for line in &lines {
            self.output(width, line)?;
            self.newline()?;
        }
        Ok(lines.len())
    }

    fn write_pair(&mut self, key: &Value, value: &Value, inset: bool) -> crate::Result<usize> {
        let (key_width, value_width) = pair_widths(self.max_width);
        let keys = split(key_width, &cell_text(key));
        let values = split(value_width, &cell_text(value));
        let lines = keys.len().max(values.len());

        for index in 0..lines {
            if inset {
                self.space()?;
            }
            self.output(key_width, keys.get(index).map_or("", String::as_str))?;
            if !inset {
                // Keeps the second column aligned with inset rows
                self.space()?;
            }
            self.space()?;
            self.output(value_width, values.get(index).map_or("", String::as_str))?;
            self.newline()?;
        }
        Ok(lines)
    }

    fn write_columns(&mut self, values: &[Value]) -> crate::Result<usize> {
        let joined = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(self.out, " {}", joined)?;
        self.newline()?;
        Ok(1)
    }
}

impl<W: Write> ResultFormatter for ConsoleFormatter<W> {
    fn header(&mut self, titles: &[String]) -> crate::Result<()> {
        if !titles.is_empty() {
            let row = Row::from(titles.to_vec());
            self.row_with_inset(&row, false)?;
        }
        debug!("header reset row count (was {})", self.row_count);
        self.row_count = 0;
        Ok(())
    }

    fn row_with_inset(&mut self, row: &Row, inset: bool) -> crate::Result<()> {
        let lines = match row {
            Row::Empty => return Ok(()),
            Row::Scalar(text) => {
                let width = self.max_width;
                self.output(width, text)?;
                self.newline()?;
                return Ok(());
            }
            Row::OneColumn(value) => self.write_wrapped(value)?,
            Row::TwoColumn(key, value) => self.write_pair(key, value, inset)?,
            Row::MultiColumn(values) => self.write_columns(values)?,
        };
        self.row_count += 1;
        trace!("row {} rendered on {} line(s)", self.row_count, lines);
        Ok(())
    }

    fn footer(&mut self, start: Option<Instant>) -> crate::Result<()> {
        let Some(start) = start else {
            return Ok(());
        };
        let line = summary(self.row_count, start.elapsed());
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn max_width(&self) -> usize {
        self.max_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn render(width: usize, f: impl FnOnce(&mut ConsoleFormatter<&mut Vec<u8>>)) -> String {
        let mut out = Vec::new();
        {
            let mut formatter = ConsoleFormatter::new(&mut out, width).unwrap();
            f(&mut formatter);
        }
        String::from_utf8(out).unwrap()
    }

    fn lines(output: &str) -> Vec<&str> {
        output.lines().collect()
    }

    #[test]
    fn test_new_rejects_narrow_width() {
        for width in [0, 1, 3] {
            let result = ConsoleFormatter::new(Vec::new(), width);
            assert!(matches!(
                result,
                Err(FormatError::InvalidWidth { width: w, min: MIN_WIDTH }) if w == width
            ));
        }
        assert!(ConsoleFormatter::new(Vec::new(), MIN_WIDTH).is_ok());
    }

    #[test]
    fn test_default_width() {
        let formatter = ConsoleFormatter::with_default_width(Vec::new());
        assert_eq!(formatter.max_width(), 100);
        assert_eq!(formatter.row_count(), 0);
    }

    #[test]
    fn test_scalar_line_is_padded() {
        let mut count = 0;
        let output = render(10, |f| {
            f.row(&Row::line("ok")).unwrap();
            count = f.row_count();
        });
        assert_eq!(output, "ok        \n");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_scalar_line_longer_than_width_is_kept_whole() {
        let output = render(4, |f| f.row(&Row::line("longer")).unwrap());
        assert_eq!(output, "longer\n");
    }

    #[test]
    fn test_single_value_wraps() {
        let mut count = 0;
        let output = render(20, |f| {
            f.row(&Row::from(vec!["x".repeat(45)])).unwrap();
            count = f.row_count();
        });
        let lines = lines(&output);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x".repeat(20));
        assert_eq!(lines[1], "x".repeat(20));
        assert_eq!(lines[2], format!("{:<20}", "x".repeat(5)));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_single_empty_value_prints_blank_line() {
        let output = render(8, |f| f.row(&Row::from(vec![""])).unwrap());
        assert_eq!(output, "        \n");
    }

    #[test]
    fn test_single_value_line_count_matches_escaped_length() {
        let value = "a\nb\tc".repeat(7);
        let escaped_len = cell_text(&Value::from(value.as_str())).chars().count();
        let output = render(10, |f| f.row(&Row::from(vec![value.as_str()])).unwrap());
        assert_eq!(lines(&output).len(), escaped_len.div_ceil(10));
    }

    #[test]
    fn test_single_numeric_value_renders_decimal() {
        let output = render(10, |f| {
            f.row(&Row::OneColumn(Value::Integer(2147483647))).unwrap()
        });
        assert_eq!(output, "2147483647\n");
    }

    #[test]
    fn test_pair_fits_on_one_line() {
        let output = render(100, |f| f.row(&Row::from(vec!["k1", "v1"])).unwrap());
        let lines = lines(&output);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], format!(" {:<25} {:<73}", "k1", "v1"));
        assert_eq!(lines[0].len(), 100);
    }

    #[test]
    fn test_pair_wraps_both_columns() {
        // width 20: key column 5, value column 13
        let output = render(20, |f| {
            f.row(&Row::from(vec!["abcdefgh", "0123456789abcdefghijklmnop"]))
                .unwrap()
        });
        assert_eq!(
            lines(&output),
            vec![
                " abcde 0123456789abc",
                " fgh   defghijklmnop",
            ]
        );
    }

    #[test]
    fn test_pair_wraps_escaped_key() {
        // width 20: key column 5, value column 13; "a\nb\tc" escapes to 7 chars
        let key = "a\nb\tc";
        let escaped_len = cell_text(&Value::from(key)).chars().count();
        let output = render(20, |f| f.row(&Row::from(vec![key, "v"])).unwrap());
        let lines = lines(&output);
        assert_eq!(lines.len(), escaped_len.div_ceil(5).max(1usize.div_ceil(13)));
        assert_eq!(
            lines,
            vec![
                format!(" {:<5} {:<13}", "a\\nb\\", "v"),
                format!(" {:<5} {:<13}", "tc", ""),
            ]
        );
    }

    #[test]
    fn test_pair_large_unsigned_value() {
        // width 40: key column 10, value column 28
        let output = render(40, |f| {
            f.row(&Row::TwoColumn(Value::from("k"), Value::Unsigned(u64::MAX)))
                .unwrap()
        });
        assert_eq!(output, format!(" {:<10} {:<28}\n", "k", "18446744073709551615"));
    }

    #[test]
    fn test_pair_float_keeps_fraction() {
        let output = render(40, |f| {
            f.row(&Row::TwoColumn(Value::from("k"), Value::Float(3.0)))
                .unwrap()
        });
        assert_eq!(output, format!(" {:<10} {:<28}\n", "k", "3.0"));

        let huge = render(40, |f| {
            f.row(&Row::TwoColumn(Value::from("k"), Value::Float(1e300)))
                .unwrap()
        });
        assert_eq!(lines(&huge).len(), 1);
    }

    #[test]
    fn test_pair_line_count_is_longest_column() {
        // width 20: key column 5, value column 13
        let output = render(20, |f| {
            f.row(&Row::from(vec!["k".repeat(16), "v".to_string()]))
                .unwrap()
        });
        let lines = lines(&output);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], format!(" k{:<4} {:<13}", "", ""));
    }

    #[test]
    fn test_pair_without_inset_aligns_second_column() {
        let inset = render(20, |f| f.row(&Row::from(vec!["a", "b"])).unwrap());
        let flush = render(20, |f| {
            f.row_with_inset(&Row::from(vec!["a", "b"]), false).unwrap()
        });
        assert_eq!(inset, " a     b            \n");
        assert_eq!(flush, "a      b            \n");
        assert_eq!(inset.find('b'), flush.find('b'));
    }

    #[test]
    fn test_pair_numeric_value() {
        let output = render(20, |f| {
            f.row(&Row::TwoColumn(Value::from("VERSIONS"), Value::Integer(3)))
                .unwrap()
        });
        assert_eq!(
            lines(&output),
            vec![
                format!(" VERSI {:<13}", "3"),
                format!(" {:<5} {:<13}", "ONS", ""),
            ]
        );
    }

    #[test]
    fn test_multi_column_single_line() {
        let mut count = 0;
        let output = render(4, |f| {
            f.row(&Row::from(vec!["alpha", "beta", "gamma"])).unwrap();
            count = f.row_count();
        });
        assert_eq!(output, " alpha beta gamma\n");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_multi_column_mixed_values() {
        let row = Row::from_values(vec![
            Value::from("r1"),
            Value::Integer(10),
            Value::Float(2.5),
            Value::Bool(true),
        ]);
        let output = render(100, |f| f.row(&row).unwrap());
        assert_eq!(output, " r1 10 2.5 true\n");
    }

    #[test]
    fn test_empty_row_is_noop() {
        let mut count = 0;
        let output = render(100, |f| {
            f.row(&Row::from(vec!["one"])).unwrap();
            for _ in 0..5 {
                f.row(&Row::Empty).unwrap();
            }
            count = f.row_count();
        });
        assert_eq!(lines(&output).len(), 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_header_renders_titles_and_resets_count() {
        let mut counts = Vec::new();
        let output = render(100, |f| {
            f.row(&Row::from(vec!["before"])).unwrap();
            counts.push(f.row_count());
            f.header(&["a".to_string(), "b".to_string()]).unwrap();
            counts.push(f.row_count());
            f.row(&Row::from(vec!["a", "b"])).unwrap();
            counts.push(f.row_count());
        });
        let lines = lines(&output);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], format!("{:<25}  {:<73}", "a", "b"));
        assert_eq!(lines[2], format!(" {:<25} {:<73}", "a", "b"));
        assert_eq!(counts, vec![1, 0, 1]);
    }

    #[test]
    fn test_header_without_titles_prints_nothing() {
        let mut count = usize::MAX;
        let output = render(100, |f| {
            f.row(&Row::from(vec!["x", "y", "z"])).unwrap();
            f.header(&[]).unwrap();
            count = f.row_count();
        });
        assert_eq!(output, " x y z\n");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_row_count_counts_logical_rows() {
        let mut count = 0;
        render(20, |f| {
            f.row(&Row::from(vec!["y".repeat(50)])).unwrap();
            f.row(&Row::from(vec!["k", "v"])).unwrap();
            f.row(&Row::from(vec!["1", "2", "3"])).unwrap();
            count = f.row_count();
        });
        assert_eq!(count, 3);
    }

    #[test]
    fn test_footer_without_start_is_noop() {
        let output = render(100, |f| f.footer(None).unwrap());
        assert!(output.is_empty());
    }

    #[test]
    fn test_footer_reports_rows_and_elapsed() {
        let output = render(100, |f| {
            f.row(&Row::from(vec!["a", "b"])).unwrap();
            f.row(&Row::from(vec!["c", "d"])).unwrap();
            let start = Instant::now() - Duration::from_millis(5);
            f.footer(Some(start)).unwrap();
        });
        let last = lines(&output).pop().unwrap().to_string();
        assert!(last.starts_with("2 row(s) in "), "got {last:?}");
        assert!(last.ends_with(" seconds"));

        let seconds = last
            .trim_start_matches("2 row(s) in ")
            .trim_end_matches(" seconds");
        let (_, decimals) = seconds.split_once('.').unwrap();
        assert_eq!(decimals.len(), 4);
        assert!(seconds.parse::<f64>().unwrap() >= 0.005);
    }

    #[test]
    fn test_into_inner_returns_sink() {
        let mut formatter = ConsoleFormatter::new(Vec::new(), 10).unwrap();
        formatter.row(&Row::line("done")).unwrap();
        let out = formatter.into_inner();
        assert_eq!(out, b"done      \n");
    }
}
