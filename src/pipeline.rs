//! Line and submission processing.
//!
//! Runs pasted text through split, map, validate and normalize. A
//! submission may hold several lines; each line is processed independently
//! and in order, and the submission is valid only when every line is.

use crate::error::ValidationError;
use crate::models::{LineOutcome, OrderCollection, SubmissionOutcome};
use crate::normalizer::normalize;
use crate::schema::SchemaVariant;
use crate::validator::parse_line;
use tracing::{debug, info, warn};

/// Process a single raw line
pub fn process_line(raw: &str, line_number: usize, schema: SchemaVariant) -> LineOutcome {
    let validation = parse_line(raw, schema);
    let normalized = normalize(&validation.record);

    if !validation.is_valid() {
        debug!(
            "Line {} failed validation with {} error(s)",
            line_number,
            validation.errors.len()
        );
    }

    LineOutcome {
        line_number,
        validation,
        normalized,
    }
}

/// Process newline-separated text, skipping blank lines
///
/// Line numbers refer to positions in `text`, so they stay meaningful to
/// the operator even when blank lines are skipped.
pub fn process_submission(text: &str, schema: SchemaVariant) -> SubmissionOutcome {
    let lines: Vec<LineOutcome> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| process_line(line, index + 1, schema))
        .collect();

    if lines.is_empty() {
        return SubmissionOutcome {
            lines,
            submission_errors: vec![ValidationError::EmptyInput],
        };
    }

    let outcome = SubmissionOutcome {
        lines,
        submission_errors: Vec::new(),
    };

    let failed = outcome.lines.iter().filter(|line| !line.is_valid()).count();
    if failed > 0 {
        warn!(
            "{} of {} line(s) failed validation",
            failed,
            outcome.lines.len()
        );
    } else {
        debug!("All {} line(s) valid", outcome.lines.len());
    }

    outcome
}

/// Process `text` and append its records to `collection` if every line is valid
///
/// On failure the collection is left untouched and every error is returned.
pub fn submit(
    collection: &mut OrderCollection,
    text: &str,
    schema: SchemaVariant,
) -> Result<usize, Vec<String>> {
    let outcome = process_submission(text, schema);
    let appended = collection.apply(&outcome)?;
    info!(
        "Appended {} order(s), collection now holds {}",
        appended,
        collection.len()
    );
    Ok(appended)
}
