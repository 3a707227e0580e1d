//! Positional field mapping.
//!
//! Maps fixed indices of a split line onto named order columns. Indices
//! past the end of the line produce empty strings.

use crate::models::{Column, OrderRecord};
use crate::splitter::FieldSequence;

/// Build a draft record from a split line
pub fn map_fields(fields: &FieldSequence) -> OrderRecord {
    let mut record = OrderRecord::default();
    for column in Column::ALL {
        let value = fields.get(column.source_index()).unwrap_or_default();
        record.set(column, value);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::split_fields;

    #[test]
    fn test_full_line_mapping() {
        let fields = split_fields(
            "7,Night,ABC,1001,OMNI-9,01/09/2025,30/09/2025,BUY,HKEX,0700.HK,TENCENT,\"1,500\",320.4p,Ali,Ben,Filled,note,1500,320.2p,HKD",
        );
        let record = map_fields(&fields);

        assert_eq!(record.dr_code, "ABC");
        assert_eq!(record.client_code, "1001");
        assert_eq!(record.local_code, "1001");
        assert_eq!(record.omnibus_account, "OMNI-9");
        assert_eq!(record.order_date, "01/09/2025");
        assert_eq!(record.gtd_expiry_date, "30/09/2025");
        assert_eq!(record.side, "BUY");
        assert_eq!(record.market, "HKEX");
        assert_eq!(record.instrument_code, "0700.HK");
        assert_eq!(record.security_name, "TENCENT");
        assert_eq!(record.order_quantity, "1,500");
        assert_eq!(record.order_price, "320.4p");
        assert_eq!(record.status, "Filled");
        assert_eq!(record.done_quantity, "1500");
        assert_eq!(record.done_price, "320.2p");
        assert_eq!(record.settlement_currency, "HKD");
    }

    #[test]
    fn test_unmapped_indices_never_leak() {
        let fields = split_fields(
            "SERIAL,SESSION,ABC,1001,OMNI,01/09/2025,,BUY,HKEX,0700.HK,TENCENT,100,1,PREP1,PREP2,,REMARK",
        );
        let record = map_fields(&fields);
        for column in Column::ALL {
            let value = record.get(column);
            assert!(!value.starts_with("SERIAL"));
            assert!(!value.starts_with("SESSION"));
            assert!(!value.starts_with("PREP"));
            assert_ne!(value, "REMARK");
        }
    }

    #[test]
    fn test_short_line_maps_to_empty() {
        let fields = split_fields("1,Day,CSY");
        let record = map_fields(&fields);
        assert_eq!(record.dr_code, "CSY");
        assert_eq!(record.client_code, "");
        assert_eq!(record.done_price, "");
        assert_eq!(record.settlement_currency, "");
    }
}
