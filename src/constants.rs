//! Application constants for the order formatter
//!
//! Positional layout of the upstream order export, validation thresholds,
//! and the fixed markup used when rendering email output.

// =============================================================================
// Source Layout
// =============================================================================

/// Positional indices of the upstream order export
///
/// Indices 0, 1, 13, 14 and 16 (serial number, session, preparer identities
/// and remarks) are never mapped.
pub mod source_index {
    pub const DR_CODE: usize = 2;
    pub const CLIENT_CODE: usize = 3;
    pub const LOCAL_CODE: usize = 3;
    pub const OMNIBUS_ACCOUNT: usize = 4;
    pub const ORDER_DATE: usize = 5;
    pub const GTD_EXPIRY_DATE: usize = 6;
    pub const SIDE: usize = 7;
    pub const MARKET: usize = 8;
    pub const INSTRUMENT_CODE: usize = 9;
    pub const SECURITY_NAME: usize = 10;
    pub const ORDER_QUANTITY: usize = 11;
    pub const ORDER_PRICE: usize = 12;
    pub const STATUS: usize = 15;
    pub const DONE_QUANTITY: usize = 17;
    pub const DONE_PRICE: usize = 18;
    pub const SETTLEMENT_CURRENCY: usize = 19;
}

// =============================================================================
// Splitting and Validation Thresholds
// =============================================================================

/// Below this many fields the splitter retries on runs of spaces
pub const SPACE_RUN_FALLBACK_THRESHOLD: usize = 10;

/// Minimum field count for the multi-row layouts
pub const MIN_FIELDS_STANDARD: usize = 10;

/// Minimum field count for the single-row legacy layout
pub const MIN_FIELDS_LEGACY: usize = 15;

/// Error reported for empty or whitespace-only submissions
pub const EMPTY_INPUT_MESSAGE: &str = "Empty input provided";

// =============================================================================
// Display Formatting
// =============================================================================

/// Placeholder rendered for empty cells
pub const EMPTY_CELL: &str = "-";

/// Maximum fraction digits shown for price columns
pub const PRICE_MAX_FRACTION_DIGITS: usize = 5;

/// Maximum fraction digits shown for quantity columns
pub const QUANTITY_MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// HTML Output
// =============================================================================

pub mod html {
    pub const TABLE_STYLE: &str =
        "border-collapse: collapse; width: 100%; font-family: Arial, sans-serif;";
    pub const HEADER_ROW_STYLE: &str = "background-color: #f2f2f2;";
    pub const HEADER_CELL_STYLE: &str =
        "padding: 8px; text-align: left; border: 1px solid #ddd;";
    pub const HIGHLIGHT_HEADER_CELL_STYLE: &str = "padding: 8px; text-align: left; border: 1px solid #ddd; background-color: #F4AB6A; color: black;";
    pub const DATA_CELL_STYLE: &str = "padding: 8px; border: 1px solid #ddd;";

    /// Settlement disclaimer appended below the table in email output
    pub const DISCLAIMER: &str = r#"<div style="background-color: #fef2f2; border: 2px solid #dc2626; padding: 15px; border-radius: 8px; font-family: Arial, sans-serif;">
  <p style="margin-bottom: 12px;">
    <strong>Kindly check for any discrepancy in this trade confirmation against the order and phone confirmation.
    It is a MUST to revert to us by the end of the trading day.</strong>
  </p>

  <p style="margin-bottom: 12px;">
    Any error in trade (EIT) or disputes reported after the trade date will not be entertained.
    Please note that we will not be liable to the error because this is a price sensitive issue here.
  </p>

  <p style="margin-bottom: 15px;">
    Thank you for your kind understanding.
  </p>

  <hr style="border: 1px solid #dc2626; margin: 15px 0;">

  <h4 style="color: #cc0000; margin-bottom: 8px;">IMPORTANT NOTE:</h4>
  <p style="font-size: 14px; margin: 0;">
    All the Offline Cross Border Trade settlement DEFAULT in MYR, DRs/Remisiers <strong>MUST NOTIFY</strong>
    CGS I'ntl SEC MY OPS-CROSS BORDER SETTLEMENT
    <a href="mailto:opssett.my@cgsi.com" style="color: #0066cc; text-decoration: underline;">(opssett.my@cgsi.com)</a>
    by <strong>T+1 BEFORE 11:30AM</strong>, if your client wishes to maintain the settlement in traded currency.
  </p>
</div>"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimums_are_consistent() {
        assert!(MIN_FIELDS_STANDARD <= MIN_FIELDS_LEGACY);
        assert_eq!(SPACE_RUN_FALLBACK_THRESHOLD, MIN_FIELDS_STANDARD);
    }

    #[test]
    fn test_unmapped_indices_are_skipped() {
        let mapped = [
            source_index::DR_CODE,
            source_index::CLIENT_CODE,
            source_index::OMNIBUS_ACCOUNT,
            source_index::ORDER_DATE,
            source_index::GTD_EXPIRY_DATE,
            source_index::SIDE,
            source_index::MARKET,
            source_index::INSTRUMENT_CODE,
            source_index::SECURITY_NAME,
            source_index::ORDER_QUANTITY,
            source_index::ORDER_PRICE,
            source_index::STATUS,
            source_index::DONE_QUANTITY,
            source_index::DONE_PRICE,
        ];
        for unmapped in [0, 1, 13, 14, 16] {
            assert!(!mapped.contains(&unmapped));
        }
    }
}
