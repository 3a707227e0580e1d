//! Column layouts supported by the formatter.
//!
//! The upstream export has drifted between a fourteen-column layout and two
//! fifteen-column layouts. Each layout fixes the rendered column order and
//! the minimum number of fields a pasted line must carry.

use crate::constants::{MIN_FIELDS_LEGACY, MIN_FIELDS_STANDARD};
use crate::models::Column;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const STANDARD_COLUMNS: &[Column] = &[
    Column::DrCode,
    Column::ClientCode,
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
];

const LEGACY_COLUMNS: &[Column] = &[
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
];

const SETTLEMENT_COLUMNS: &[Column] = &[
    Column::DrCode,
    Column::ClientCode,
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

/// Supported export layouts
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// Fourteen columns, multi-row submissions
    #[default]
    Standard,
    /// Single-row layout with a separate client local code column
    Legacy,
    /// Fourteen columns plus settlement currency
    Settlement,
}

impl SchemaVariant {
    /// Columns rendered for this layout, in output order
    pub fn columns(&self) -> &'static [Column] {
        match self {
            SchemaVariant::Standard => STANDARD_COLUMNS,
            SchemaVariant::Legacy => LEGACY_COLUMNS,
            SchemaVariant::Settlement => SETTLEMENT_COLUMNS,
        }
    }

    /// Fewer source fields than this is reported as a structural error
    pub fn min_fields(&self) -> usize {
        match self {
            SchemaVariant::Legacy => MIN_FIELDS_LEGACY,
            SchemaVariant::Standard | SchemaVariant::Settlement => MIN_FIELDS_STANDARD,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchemaVariant::Standard => "standard",
            SchemaVariant::Legacy => "legacy",
            SchemaVariant::Settlement => "settlement",
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
