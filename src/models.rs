//! Core data structures for order formatting.
//!
//! Defines the closed set of order columns, the order record itself,
//! per-line validation results and the caller-owned order collection.

use crate::constants::source_index;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Every column an order record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    DrCode,
    ClientCode,
    LocalCode,
    OmnibusAccount,
    OrderDate,
    GtdExpiryDate,
    Side,
    Market,
    InstrumentCode,
    SecurityName,
    OrderQuantity,
    OrderPrice,
    Status,
    DoneQuantity,
    DonePrice,
    SettlementCurrency,
}

impl Column {
    /// All columns in record order
    pub const ALL: [Column; 16] = [
        Column::DrCode,
        Column::ClientCode,
        Column::LocalCode,
        Column::OmnibusAccount,
        Column::OrderDate,
        Column::GtdExpiryDate,
        Column::Side,
        Column::Market,
        Column::InstrumentCode,
        Column::SecurityName,
        Column::OrderQuantity,
        Column::OrderPrice,
        Column::Status,
        Column::DoneQuantity,
        Column::DonePrice,
        Column::SettlementCurrency,
    ];

    /// Columns that must be non-empty for a line to be valid
    pub const REQUIRED: [Column; 8] = [
        Column::DrCode,
        Column::ClientCode,
        Column::OrderDate,
        Column::Side,
        Column::Market,
        Column::InstrumentCode,
        Column::SecurityName,
        Column::OrderQuantity,
    ];

    /// Header label used in error messages and rendered tables
    pub fn label(&self) -> &'static str {
        match self {
            Column::DrCode => "DR Code",
            Column::ClientCode => "Client Code",
            Column::LocalCode => "(Local)",
            Column::OmnibusAccount => "Omnibus/GK Acc No",
            Column::OrderDate => "Order Date",
            Column::GtdExpiryDate => "GTD EXPIRY DATE",
            Column::Side => "B/S",
            Column::Market => "Market",
            Column::InstrumentCode => "Instrument Code",
            Column::SecurityName => "Securities/Stock Name",
            Column::OrderQuantity => "Order.QTY",
            Column::OrderPrice => "Order.Price",
            Column::Status => "Status",
            Column::DoneQuantity => "Done Quantity",
            Column::DonePrice => "Done Price",
            Column::SettlementCurrency => "Settlement Currency",
        }
    }

    /// Position of this column in the upstream export
    pub fn source_index(&self) -> usize {
        match self {
            Column::DrCode => source_index::DR_CODE,
            Column::ClientCode => source_index::CLIENT_CODE,
            Column::LocalCode => source_index::LOCAL_CODE,
            Column::OmnibusAccount => source_index::OMNIBUS_ACCOUNT,
            Column::OrderDate => source_index::ORDER_DATE,
            Column::GtdExpiryDate => source_index::GTD_EXPIRY_DATE,
            Column::Side => source_index::SIDE,
            Column::Market => source_index::MARKET,
            Column::InstrumentCode => source_index::INSTRUMENT_CODE,
            Column::SecurityName => source_index::SECURITY_NAME,
            Column::OrderQuantity => source_index::ORDER_QUANTITY,
            Column::OrderPrice => source_index::ORDER_PRICE,
            Column::Status => source_index::STATUS,
            Column::DoneQuantity => source_index::DONE_QUANTITY,
            Column::DonePrice => source_index::DONE_PRICE,
            Column::SettlementCurrency => source_index::SETTLEMENT_CURRENCY,
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn is_price(&self) -> bool {
        matches!(self, Column::OrderPrice | Column::DonePrice)
    }

    pub fn is_quantity(&self) -> bool {
        matches!(self, Column::OrderQuantity | Column::DoneQuantity)
    }

    /// Numeric columns get thousands separators when displayed
    pub fn is_numeric(&self) -> bool {
        self.is_price() || self.is_quantity()
    }

    /// Executed-trade columns, optionally highlighted in rendered output
    pub fn is_execution(&self) -> bool {
        matches!(self, Column::DoneQuantity | Column::DonePrice)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One trade order with every column held as text
///
/// Absent source fields are empty strings, never missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "DR Code")]
    pub dr_code: String,
    #[serde(rename = "Client Code")]
    pub client_code: String,
    #[serde(rename = "(Local)")]
    pub local_code: String,
    #[serde(rename = "Omnibus/GK Acc No")]
    pub omnibus_account: String,
    #[serde(rename = "Order Date")]
    pub order_date: String,
    #[serde(rename = "GTD EXPIRY DATE")]
    pub gtd_expiry_date: String,
    #[serde(rename = "B/S")]
    pub side: String,
    #[serde(rename = "Market")]
    pub market: String,
    #[serde(rename = "Instrument Code")]
    pub instrument_code: String,
    #[serde(rename = "Securities/Stock Name")]
    pub security_name: String,
    #[serde(rename = "Order.QTY")]
    pub order_quantity: String,
    #[serde(rename = "Order.Price")]
    pub order_price: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Done Quantity")]
    pub done_quantity: String,
    #[serde(rename = "Done Price")]
    pub done_price: String,
    #[serde(rename = "Settlement Currency")]
    pub settlement_currency: String,
}

impl OrderRecord {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::DrCode => &self.dr_code,
            Column::ClientCode => &self.client_code,
            Column::LocalCode => &self.local_code,
            Column::OmnibusAccount => &self.omnibus_account,
            Column::OrderDate => &self.order_date,
            Column::GtdExpiryDate => &self.gtd_expiry_date,
            Column::Side => &self.side,
            Column::Market => &self.market,
            Column::InstrumentCode => &self.instrument_code,
            Column::SecurityName => &self.security_name,
            Column::OrderQuantity => &self.order_quantity,
            Column::OrderPrice => &self.order_price,
            Column::Status => &self.status,
            Column::DoneQuantity => &self.done_quantity,
            Column::DonePrice => &self.done_price,
            Column::SettlementCurrency => &self.settlement_currency,
        }
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        let slot = match column {
            Column::DrCode => &mut self.dr_code,
            Column::ClientCode => &mut self.client_code,
            Column::LocalCode => &mut self.local_code,
            Column::OmnibusAccount => &mut self.omnibus_account,
            Column::OrderDate => &mut self.order_date,
            Column::GtdExpiryDate => &mut self.gtd_expiry_date,
            Column::Side => &mut self.side,
            Column::Market => &mut self.market,
            Column::InstrumentCode => &mut self.instrument_code,
            Column::SecurityName => &mut self.security_name,
            Column::OrderQuantity => &mut self.order_quantity,
            Column::OrderPrice => &mut self.order_price,
            Column::Status => &mut self.status,
            Column::DoneQuantity => &mut self.done_quantity,
            Column::DonePrice => &mut self.done_price,
            Column::SettlementCurrency => &mut self.settlement_currency,
        };
        *slot = value.into();
    }

    /// Required columns whose trimmed value is empty, in required order
    pub fn missing_required(&self) -> Vec<Column> {
        Column::REQUIRED
            .into_iter()
            .filter(|column| self.get(*column).trim().is_empty())
            .collect()
    }
}

/// Outcome of validating one pasted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub record: OrderRecord,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable error messages in the order they were found
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Result of running one line through the whole pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number within the submission
    pub line_number: usize,
    pub validation: ValidationResult,
    /// Record after value normalization
    pub normalized: OrderRecord,
}

impl LineOutcome {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

/// Per-line outcomes of a (possibly multi-line) submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub lines: Vec<LineOutcome>,
    /// Errors not tied to a single line, e.g. an entirely blank submission
    pub submission_errors: Vec<ValidationError>,
}

impl SubmissionOutcome {
    /// A submission is valid only when every line is valid
    pub fn is_valid(&self) -> bool {
        self.submission_errors.is_empty()
            && !self.lines.is_empty()
            && self.lines.iter().all(LineOutcome::is_valid)
    }

    /// All error messages, prefixed with the line number when more than one line was submitted
    pub fn errors(&self) -> Vec<String> {
        let mut messages: Vec<String> = self
            .submission_errors
            .iter()
            .map(ToString::to_string)
            .collect();

        if messages.is_empty() && self.lines.is_empty() {
            messages.push(ValidationError::EmptyInput.to_string());
        }

        let prefix_lines = self.lines.len() > 1;
        for line in &self.lines {
            for message in line.validation.messages() {
                if prefix_lines {
                    messages.push(format!("Line {}: {}", line.line_number, message));
                } else {
                    messages.push(message);
                }
            }
        }
        messages
    }

    /// Normalized records in input order
    pub fn records(&self) -> Vec<OrderRecord> {
        self.lines.iter().map(|line| line.normalized.clone()).collect()
    }
}

/// Orders accumulated across submissions, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderCollection {
    orders: Vec<OrderRecord>,
}

impl OrderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every record of a valid submission, or nothing at all
    ///
    /// Returns the number of appended records, or every collected error
    /// message when any line failed validation.
    pub fn apply(&mut self, outcome: &SubmissionOutcome) -> Result<usize, Vec<String>> {
        if !outcome.is_valid() {
            return Err(outcome.errors());
        }
        let records = outcome.records();
        let appended = records.len();
        self.orders.extend(records);
        Ok(appended)
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_line(line_number: usize, client_code: &str) -> LineOutcome {
        let mut record = OrderRecord::default();
        record.set(Column::ClientCode, client_code);
        LineOutcome {
            line_number,
            validation: ValidationResult {
                record: record.clone(),
                errors: Vec::new(),
            },
            normalized: record,
        }
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, column) in Column::ALL.iter().enumerate() {
            for other in &Column::ALL[i + 1..] {
                assert_ne!(column.label(), other.label());
            }
        }
    }

    #[test]
    fn test_column_categories() {
        assert!(Column::OrderPrice.is_price());
        assert!(Column::DonePrice.is_numeric());
        assert!(Column::DoneQuantity.is_quantity());
        assert!(!Column::Status.is_numeric());
        assert!(Column::DoneQuantity.is_execution());
        assert!(!Column::OrderQuantity.is_execution());
        assert!(Column::OrderQuantity.is_required());
        assert!(!Column::Status.is_required());
    }

    #[test]
    fn test_get_and_set_cover_every_column() {
        let mut record = OrderRecord::default();
        for column in Column::ALL {
            assert_eq!(record.get(column), "");
            record.set(column, column.label());
        }
        for column in Column::ALL {
            assert_eq!(record.get(column), column.label());
        }
    }

    #[test]
    fn test_missing_required_ignores_whitespace() {
        let mut record = OrderRecord::default();
        record.set(Column::DrCode, "CSY");
        record.set(Column::ClientCode, "   ");
        let missing = record.missing_required();
        assert!(!missing.contains(&Column::DrCode));
        assert!(missing.contains(&Column::ClientCode));
        assert_eq!(missing.len(), 7);
    }

    #[test]
    fn test_record_serializes_with_labels() {
        let mut record = OrderRecord::default();
        record.set(Column::Side, "SELL");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["B/S"], "SELL");
        assert_eq!(json["Order.QTY"], "");
    }

    #[test]
    fn test_collection_apply_and_clear() {
        let outcome = SubmissionOutcome {
            lines: vec![valid_line(1, "255048"), valid_line(2, "300001")],
            submission_errors: Vec::new(),
        };
        let mut collection = OrderCollection::new();
        assert_eq!(collection.apply(&outcome), Ok(2));
        assert_eq!(collection.orders()[1].client_code, "300001");
        collection.clear();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_blank_submission_reports_empty_input() {
        let outcome = SubmissionOutcome::default();
        assert!(!outcome.is_valid());
        assert_eq!(outcome.errors(), vec!["Empty input provided".to_string()]);

        let mut collection = OrderCollection::new();
        assert_eq!(
            collection.apply(&outcome),
            Err(vec!["Empty input provided".to_string()])
        );
        assert!(collection.is_empty());
    }
}
