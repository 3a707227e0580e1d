//! Validation of mapped order records.
//!
//! Problems are collected, never raised: a line with missing data still
//! yields a record so the operator can see what was parsed.

use crate::error::ValidationError;
use crate::mapper::map_fields;
use crate::models::{OrderRecord, ValidationResult};
use crate::schema::SchemaVariant;
use crate::splitter::split_fields;

/// Check a mapped record against the required columns and field count
///
/// A structural error, if any, comes first, followed by one error per
/// missing required column.
pub fn validate(
    record: OrderRecord,
    field_count: usize,
    schema: SchemaVariant,
) -> ValidationResult {
    let mut errors = Vec::new();

    let expected = schema.min_fields();
    if field_count < expected {
        errors.push(ValidationError::Structural {
            expected,
            actual: field_count,
        });
    }

    errors.extend(
        record
            .missing_required()
            .into_iter()
            .map(ValidationError::RequiredFieldMissing),
    );

    ValidationResult { record, errors }
}

/// Split, map and validate one raw line
///
/// Empty or whitespace-only input short-circuits to a single error.
pub fn parse_line(raw: &str, schema: SchemaVariant) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult {
            record: OrderRecord::default(),
            errors: vec![ValidationError::EmptyInput],
        };
    }

    let fields = split_fields(raw);
    let record = map_fields(&fields);
    validate(record, fields.len(), schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    const EXAMPLE: &str = "1,Day,CSY,255048,68380,11/08/2025,29/08/2025,SELL,LSE,PALMP.L,PANTHER METALS,4000,100P,Haris,Joseph,,,,";

    #[test]
    fn test_example_line_is_valid() {
        let result = parse_line(EXAMPLE, SchemaVariant::Standard);
        assert!(result.is_valid(), "unexpected errors: {:?}", result.messages());

        let record = &result.record;
        assert_eq!(record.dr_code, "CSY");
        assert_eq!(record.client_code, "255048");
        assert_eq!(record.order_date, "11/08/2025");
        assert_eq!(record.side, "SELL");
        assert_eq!(record.market, "LSE");
        assert_eq!(record.instrument_code, "PALMP.L");
        assert_eq!(record.order_quantity, "4000");
        assert_eq!(record.order_price, "100P");
        assert_eq!(record.status, "");
    }

    #[test]
    fn test_example_line_is_valid_for_legacy() {
        let result = parse_line(EXAMPLE, SchemaVariant::Legacy);
        assert!(result.is_valid());
        assert_eq!(result.record.local_code, "255048");
    }

    #[test]
    fn test_empty_input() {
        for raw in ["", "   ", "\t\n"] {
            let result = parse_line(raw, SchemaVariant::Standard);
            assert!(!result.is_valid());
            assert_eq!(result.errors, vec![ValidationError::EmptyInput]);
            assert_eq!(result.messages(), vec!["Empty input provided".to_string()]);
        }
    }

    #[test]
    fn test_short_line_reports_structure_first() {
        let result = parse_line("1,Day,CSY,255048", SchemaVariant::Standard);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors[0],
            ValidationError::Structural {
                expected: 10,
                actual: 4
            }
        );
        assert!(
            result
                .errors
                .contains(&ValidationError::RequiredFieldMissing(Column::Market))
        );
        assert!(
            !result
                .errors
                .contains(&ValidationError::RequiredFieldMissing(Column::DrCode))
        );
        let structural = result
            .errors
            .iter()
            .filter(|e| matches!(e, ValidationError::Structural { .. }))
            .count();
        assert_eq!(structural, 1);
    }

    #[test]
    fn test_legacy_requires_fifteen_fields() {
        let line = "1,Day,CSY,255048,68380,11/08/2025,29/08/2025,SELL,LSE,PALMP.L,PANTHER METALS,4000";
        let standard = parse_line(line, SchemaVariant::Standard);
        assert!(standard.is_valid());

        let legacy = parse_line(line, SchemaVariant::Legacy);
        assert_eq!(
            legacy.messages(),
            vec!["Insufficient data fields. Expected at least 15 fields, got 12".to_string()]
        );
    }

    #[test]
    fn test_missing_required_fields_in_order() {
        let line = "1,Day,CSY,255048,68380,11/08/2025,29/08/2025,,,PALMP.L,PANTHER METALS,,100P";
        let result = parse_line(line, SchemaVariant::Standard);
        assert_eq!(
            result.messages(),
            vec![
                "B/S is required".to_string(),
                "Market is required".to_string(),
                "Order.QTY is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_optional_columns_may_be_empty() {
        let line = "1,Day,CSY,255048,,11/08/2025,,SELL,LSE,PALMP.L,PANTHER METALS,4000,,,,,,,";
        let result = parse_line(line, SchemaVariant::Standard);
        assert!(result.is_valid());
    }
}
