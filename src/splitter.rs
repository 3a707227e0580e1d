//! Delimiter detection and field splitting for pasted order lines.
//!
//! Operators paste rows copied from a spreadsheet export (tab separated),
//! a CSV file (comma separated) or a visually aligned report (runs of
//! spaces). The splitter picks one delimiter per line and returns the
//! trimmed fields in source order.

use crate::constants::SPACE_RUN_FALLBACK_THRESHOLD;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("space run pattern is valid"));

/// Delimiter detected for a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
    /// Two or more consecutive spaces
    SpaceRun,
}

impl Delimiter {
    /// Separator written when a sequence is joined back into a line
    pub fn separator(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::SpaceRun => "  ",
        }
    }
}

/// Trimmed fields of one line, split on exactly one delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSequence {
    fields: Vec<String>,
    delimiter: Delimiter,
}

impl FieldSequence {
    pub fn new(fields: Vec<String>, delimiter: Delimiter) -> Self {
        Self { fields, delimiter }
    }

    /// Field at `index`, or `None` past the end of the line
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Rebuild a line using the detected delimiter
    pub fn join(&self) -> String {
        self.fields.join(self.delimiter.separator())
    }
}

/// Pick tab or comma by counting both outside double-quoted spans
pub fn detect_delimiter(line: &str) -> Delimiter {
    let mut in_quotes = false;
    let mut tabs = 0usize;
    let mut commas = 0usize;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '\t' if !in_quotes => tabs += 1,
            ',' if !in_quotes => commas += 1,
            _ => {}
        }
    }

    if tabs > commas {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}

/// Split a raw line into trimmed fields
///
/// Trailing empty fields are kept. When the delimited split yields fewer
/// than ten fields and the line contains a run of two or more spaces, the
/// line is re-split on space runs and empty fields are dropped.
pub fn split_fields(line: &str) -> FieldSequence {
    let delimiter = detect_delimiter(line);
    let separator = match delimiter {
        Delimiter::Tab => '\t',
        _ => ',',
    };
    let fields = split_quoted(line, separator);

    if fields.len() < SPACE_RUN_FALLBACK_THRESHOLD && SPACE_RUN.is_match(line) {
        let space_fields: Vec<String> = SPACE_RUN
            .split(line)
            .map(|field| field.trim().to_string())
            .filter(|field| !field.is_empty())
            .collect();

        debug!(
            "Only {} {:?}-delimited fields, falling back to space runs ({} fields)",
            fields.len(),
            delimiter,
            space_fields.len()
        );
        return FieldSequence::new(space_fields, Delimiter::SpaceRun);
    }

    debug!("Split line into {} fields on {:?}", fields.len(), delimiter);
    FieldSequence::new(fields, delimiter)
}

/// Split on `separator`, treating it as content inside double quotes
fn split_quoted(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == separator && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());

    fields
}
