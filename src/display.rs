//! Display formatting for order table cells.
//!
//! Numeric columns are rendered with en-US thousands separators and a
//! bounded number of fraction digits (up to 5 for prices, 2 for
//! quantities), without forced trailing zeros. Anything that does not look
//! like a number is shown as-is.

use crate::constants::{EMPTY_CELL, PRICE_MAX_FRACTION_DIGITS, QUANTITY_MAX_FRACTION_DIGITS};
use crate::models::{Column, OrderRecord};
use crate::schema::SchemaVariant;
use regex::Regex;
use std::sync::LazyLock;

/// Leading numeric prefix, parsed the way a lenient float parser would
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("numeric prefix pattern is valid")
});

/// Display string for one column of a record
pub fn format_cell(record: &OrderRecord, column: Column) -> String {
    let value = record.get(column);
    if column.is_numeric() {
        format_number(value, column)
    } else if value.trim().is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

/// Display strings for every column of `schema`, in schema order
pub fn format_row(record: &OrderRecord, schema: SchemaVariant) -> Vec<String> {
    schema
        .columns()
        .iter()
        .map(|column| format_cell(record, *column))
        .collect()
}

/// Format a numeric-looking value for a quantity or price column
pub fn format_number(value: &str, column: Column) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == EMPTY_CELL {
        return EMPTY_CELL.to_string();
    }

    let cleaned: String = trimmed.chars().filter(|ch| *ch != ',').collect();
    let Some(number) = parse_leading_number(&cleaned) else {
        return value.to_string();
    };
    if !number.is_finite() {
        return value.to_string();
    }

    let max_fraction_digits = if column.is_price() {
        PRICE_MAX_FRACTION_DIGITS
    } else {
        QUANTITY_MAX_FRACTION_DIGITS
    };
    format_en_us(number, max_fraction_digits)
}

fn parse_leading_number(value: &str) -> Option<f64> {
    NUMERIC_PREFIX
        .find(value)
        .and_then(|found| found.as_str().parse::<f64>().ok())
}

/// Round half-up on the shortest decimal form, then group thousands
fn format_en_us(number: f64, max_fraction_digits: usize) -> String {
    let digits = number.abs().to_string();
    let (integer, fraction) = round_decimal(&digits, max_fraction_digits);

    let is_zero = integer.chars().all(|ch| ch == '0') && fraction.is_empty();
    let mut out = String::new();
    if number.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Split a plain decimal string and round it to `max_fraction_digits`
///
/// Returns the integer digits and the fraction digits with trailing zeros
/// removed.
fn round_decimal(digits: &str, max_fraction_digits: usize) -> (String, String) {
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if fraction.len() <= max_fraction_digits {
        return (
            integer.to_string(),
            fraction.trim_end_matches('0').to_string(),
        );
    }

    let round_up = fraction.as_bytes()[max_fraction_digits] >= b'5';
    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction[..max_fraction_digits].bytes())
        .collect();

    if round_up {
        let mut index = kept.len();
        loop {
            if index == 0 {
                kept.insert(0, b'1');
                break;
            }
            index -= 1;
            if kept[index] == b'9' {
                kept[index] = b'0';
            } else {
                kept[index] += 1;
                break;
            }
        }
    }

    let split = kept.len() - max_fraction_digits;
    let integer: String = kept[..split].iter().map(|b| *b as char).collect();
    let fraction: String = kept[split..].iter().map(|b| *b as char).collect();
    (integer, fraction.trim_end_matches('0').to_string())
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    #[test]
    fn test_price_keeps_up_to_five_digits() {
        assert_eq!(format_number("0.985", Column::OrderPrice), "0.985");
        assert_eq!(format_number("1.234567", Column::DonePrice), "1.23457");
        assert_eq!(format_number("12.50000", Column::OrderPrice), "12.5");
        assert_eq!(format_number("1500.25", Column::OrderPrice), "1,500.25");
    }

    #[test]
    fn test_quantity_keeps_up_to_two_digits() {
        assert_eq!(format_number("22000", Column::OrderQuantity), "22,000");
        assert_eq!(format_number("1234567.891", Column::DoneQuantity), "1,234,567.89");
        assert_eq!(format_number("0.005", Column::OrderQuantity), "0.01");
        assert_eq!(format_number("999.999", Column::OrderQuantity), "1,000");
    }

    #[test]
    fn test_existing_separators_are_reformatted() {
        assert_eq!(format_number("1,0000", Column::OrderQuantity), "10,000");
    }

    #[test]
    fn test_blank_values_render_as_dash() {
        for value in ["", "-", "   "] {
            assert_eq!(format_number(value, Column::OrderQuantity), "-");
        }
    }

    #[test]
    fn test_non_numeric_passes_through() {
        assert_eq!(format_number("N/A", Column::OrderPrice), "N/A");
        assert_eq!(format_number("MKT", Column::OrderQuantity), "MKT");
    }

    #[test]
    fn test_numeric_prefix_is_used() {
        assert_eq!(format_number("100P", Column::OrderPrice), "100");
        assert_eq!(format_number("-12.5 USD", Column::DonePrice), "-12.5");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_number("-0.001", Column::OrderQuantity), "0");
    }

    #[test]
    fn test_non_numeric_columns() {
        let mut record = OrderRecord::default();
        record.set(Column::Market, "LSE");
        record.set(Column::Status, "  ");
        assert_eq!(format_cell(&record, Column::Market), "LSE");
        assert_eq!(format_cell(&record, Column::Status), "-");
        assert_eq!(format_cell(&record, Column::GtdExpiryDate), "-");
    }

    #[test]
    fn test_normalize_then_format_round_trip() {
        let mut record = OrderRecord::default();
        record.set(Column::OrderQuantity, "22,000");
        record.set(Column::OrderPrice, "0.985");
        let normalized = normalize(&record);
        assert_eq!(normalized.order_quantity, "22000");
        assert_eq!(format_cell(&normalized, Column::OrderQuantity), "22,000");
        assert_eq!(format_cell(&normalized, Column::OrderPrice), "0.985");
    }

    #[test]
    fn test_row_follows_schema_order() {
        let mut record = OrderRecord::default();
        record.set(Column::DrCode, "CSY");
        record.set(Column::DonePrice, "1.5");
        let row = format_row(&record, SchemaVariant::Standard);
        assert_eq!(row.len(), 14);
        assert_eq!(row[0], "CSY");
        assert_eq!(row[13], "1.5");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
