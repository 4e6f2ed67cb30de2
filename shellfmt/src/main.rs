//! # shellfmt
//!
//! Render database shell results as fixed-width console text.
//!
//! ## Overview
//!
//! shellfmt is built on top of shellfmtlib and drives its formatter the way
//! an interactive database shell does: optional column titles, one call per
//! result row, and a closing summary with the row count and elapsed time.
//!
//! Rows arrive as JSON lines, one row per line:
//!
//! - `"Table t1 created"`: a plain status line
//! - `["a very long cell value"]`: one value wrapped across the width
//! - `["info:regioninfo", "NAME => 't1'"]`: a key/value pair in two columns
//! - `["r1", "info:a", 1]`: three or more values on a single line
//!
//! ## Usage
//!
//! ```bash
//! # Format rows from a file at the default width (110)
//! shellfmt results.jsonl
//!
//! # Read stdin, print column titles and a timing footer
//! scan-tool t1 | shellfmt --header ROW,COLUMN+CELL --timing
//!
//! # Narrow output
//! shellfmt --format-width 80 results.jsonl
//! ```
//!
//! Set `RUST_LOG=debug` to trace formatter activity on stderr.

mod input;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use shellfmtlib::{FormatOptions, OutputFormat};

/// Print width used by the shell when `--format-width` is not given
const SHELL_WIDTH: usize = 110;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("shellfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render database shell results as fixed-width console text")
        .arg(
            Arg::new("input")
                .help("JSON-lines file of result rows (defaults to stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("console")
                .help("Formatter for outputting results: console | html | json"),
        )
        .arg(
            Arg::new("format-width")
                .long("format-width")
                .visible_alias("width")
                .value_parser(value_parser!(usize))
                .default_value("110")
                .help("Width of table outputs"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Column titles printed before the rows (comma-separated)"),
        )
        .arg(
            Arg::new("timing")
                .long("timing")
                .action(ArgAction::SetTrue)
                .help("Print row count and elapsed time after the rows"),
        )
}

/// Open the row source named on the command line
fn open_input(path: &str) -> anyhow::Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("failed to open input '{}'", path))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Extract column titles from matches
fn extract_titles(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("header")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Format every input row to stdout
fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("console");
    let format = OutputFormat::from_str(format)?;
    let width = matches
        .get_one::<usize>("format-width")
        .copied()
        .unwrap_or(SHELL_WIDTH);
    let path = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let titles = extract_titles(matches);
    let timing = matches.get_flag("timing");

    let options = FormatOptions::new().format(format).width(width);
    debug!("formatting {} with {:?}", path, options);

    let reader = open_input(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut formatter = options.build(&mut out)?;

    let start = Instant::now();
    formatter.header(&titles)?;
    for row in input::rows(reader) {
        formatter.row(&row?)?;
    }
    formatter.footer(timing.then_some(start))?;
    info!("{} row(s) formatted", formatter.row_count());
    drop(formatter);

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
