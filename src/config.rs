//! Configuration for parsing and rendering.
//!
//! Holds the selected column layout and the output options that the
//! command line exposes. Library callers build one with the `with_*`
//! and `without_*` helpers.

use crate::schema::SchemaVariant;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output formats supported by the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Email-ready HTML fragment
    #[default]
    Html,
    /// Aligned plain-text table
    Text,
    /// JSON array of normalized records
    Json,
}

/// Formatter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Column layout used for validation and rendering
    pub schema: SchemaVariant,

    /// Highlight the Done Quantity / Done Price headers
    pub highlight_execution_columns: bool,

    /// Append the settlement disclaimer below the HTML table
    pub include_disclaimer: bool,

    pub output_format: OutputFormat,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            schema: SchemaVariant::Standard,
            highlight_execution_columns: true,
            include_disclaimer: true,
            output_format: OutputFormat::Html,
        }
    }
}

impl FormatterConfig {
    /// Use a different column layout
    pub fn with_schema(mut self, schema: SchemaVariant) -> Self {
        self.schema = schema;
        self
    }

    /// Select the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Render Done columns with the plain header style
    pub fn without_highlight(mut self) -> Self {
        self.highlight_execution_columns = false;
        self
    }

    /// Render the table without the disclaimer block
    pub fn without_disclaimer(mut self) -> Self {
        self.include_disclaimer = false;
        self
    }
}
