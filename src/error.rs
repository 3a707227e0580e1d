//! Error handling for order formatting operations.
//!
//! Two layers: [`ValidationError`] values are collected per line and returned
//! alongside the parsed record, while [`FormatterError`] covers the
//! operational failures around the pipeline (reading input, serializing
//! output, rejected submissions at the command boundary).

use crate::models::Column;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating one pasted line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty input provided")]
    EmptyInput,

    #[error("Insufficient data fields. Expected at least {expected} fields, got {actual}")]
    Structural { expected: usize, actual: usize },

    #[error("{} is required", .0.label())]
    RequiredFieldMissing(Column),
}

#[derive(Error, Debug)]
pub enum FormatterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Submission rejected with {} error(s): {}", .errors.len(), .errors.join("; "))]
    SubmissionRejected { errors: Vec<String> },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormatterError>;
