//! Value normalization for quantity and price columns.
//!
//! Strips formatting artifacts left by the upstream export. Values that do
//! not carry an artifact pass through untouched, so normalizing twice is
//! the same as normalizing once.

use crate::models::{Column, OrderRecord};

/// Return a copy of `record` with quantity and price columns cleaned
pub fn normalize(record: &OrderRecord) -> OrderRecord {
    let mut normalized = record.clone();
    for column in [Column::OrderQuantity, Column::DoneQuantity] {
        normalized.set(column, normalize_quantity(record.get(column)));
    }
    for column in [Column::OrderPrice, Column::DonePrice] {
        normalized.set(column, normalize_price(record.get(column)));
    }
    normalized
}

/// Remove quote characters and thousands-separator commas
pub fn normalize_quantity(value: &str) -> String {
    value
        .chars()
        .filter(|ch| *ch != '"' && *ch != ',')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Remove a trailing lowercase `p` (pence/points) unit suffix
pub fn normalize_price(value: &str) -> String {
    let trimmed = value.trim();
    trimmed
        .strip_suffix('p')
        .unwrap_or(trimmed)
        .trim_end()
        .to_string()
}
