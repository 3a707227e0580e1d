//! Output rendering for formatted orders.
//!
//! Produces the HTML fragment pasted into confirmation emails, a plain
//! text table for terminals, and JSON for scripting. Every cell goes
//! through the display formatter, in the column order of the configured
//! layout.

use crate::config::{FormatterConfig, OutputFormat};
use crate::constants::html;
use crate::display::format_row;
use crate::error::Result;
use crate::models::OrderRecord;
use crate::schema::SchemaVariant;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Render `records` in the configured output format
pub fn render(records: &[OrderRecord], config: &FormatterConfig) -> Result<String> {
    match config.output_format {
        OutputFormat::Html => Ok(render_email(records, config)),
        OutputFormat::Text => Ok(render_text(records, config.schema)),
        OutputFormat::Json => render_json(records, config.schema),
    }
}

/// HTML table followed by the disclaimer block when enabled
pub fn render_email(records: &[OrderRecord], config: &FormatterConfig) -> String {
    let mut out = render_table(records, config);
    if config.include_disclaimer {
        out.push_str("\n\n<br><br>");
        out.push_str(html::DISCLAIMER);
    }
    out
}

/// HTML table with one header row and one row per record
pub fn render_table(records: &[OrderRecord], config: &FormatterConfig) -> String {
    let columns = config.schema.columns();
    let mut out = String::new();

    out.push_str(&format!(
        "<table border=\"1\" style=\"{}\">\n  <thead>\n    <tr style=\"{}\">",
        html::TABLE_STYLE,
        html::HEADER_ROW_STYLE
    ));

    for column in columns {
        let style = if config.highlight_execution_columns && column.is_execution() {
            html::HIGHLIGHT_HEADER_CELL_STYLE
        } else {
            html::HEADER_CELL_STYLE
        };
        out.push_str(&format!(
            "\n      <th style=\"{}\">{}</th>",
            style,
            escape_html(column.label())
        ));
    }
    out.push_str("\n    </tr>\n  </thead>\n  <tbody>");

    for record in records {
        out.push_str("\n    <tr>");
        for cell in format_row(record, config.schema) {
            out.push_str(&format!(
                "\n      <td style=\"{}\">{}</td>",
                html::DATA_CELL_STYLE,
                escape_html(&cell)
            ));
        }
        out.push_str("\n    </tr>");
    }

    out.push_str("\n  </tbody>\n</table>");
    out
}

/// Column-aligned plain text table
pub fn render_text(records: &[OrderRecord], schema: SchemaVariant) -> String {
    let headers: Vec<String> = schema
        .columns()
        .iter()
        .map(|column| column.label().to_string())
        .collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| format_row(record, schema))
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(text_line(&headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(text_line(row, &widths));
    }
    lines.join("\n")
}

fn text_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Pretty-printed JSON array, one object per record keyed by the layout's column labels
pub fn render_json(records: &[OrderRecord], schema: SchemaVariant) -> Result<String> {
    let rows: Vec<LayoutRecord<'_>> = records
        .iter()
        .map(|record| LayoutRecord { record, schema })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// A record restricted to the columns of one layout, in layout order
struct LayoutRecord<'a> {
    record: &'a OrderRecord,
    schema: SchemaVariant,
}

impl Serialize for LayoutRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let columns = self.schema.columns();
        let mut map = serializer.serialize_map(Some(columns.len()))?;
        for column in columns {
            map.serialize_entry(column.label(), self.record.get(*column))?;
        }
        map.end()
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
