//! Fixed-width SIAP records.
//!
//! Layout per record, no separators:
//!
//! | Columns | Width | Content |
//! |---------|-------|---------|
//! | 1-11    | 11    | CUIT, left-justified |
//! | 12-61   | 50    | partner name, left-justified |
//! | 62-76   | 15    | amount, zero-padded, 2 decimals |
//!
//! followed by CRLF.

use rust_decimal::Decimal;

use super::text::{clean_fixed, fit, tax_id_or};
use crate::core::{RankedEntry, SiapConfig, SiapError, format_amount, round_amount};

/// Width of the tax-id field.
pub const TAX_ID_WIDTH: usize = 11;
/// Width of the partner name field.
pub const NAME_WIDTH: usize = 50;
/// Width of the amount field (12 integer digits, point, 2 decimals).
pub const AMOUNT_WIDTH: usize = 15;
/// Length of a record including the CRLF terminator.
pub const RECORD_LEN: usize = TAX_ID_WIDTH + NAME_WIDTH + AMOUNT_WIDTH + 2;

/// Append one fixed-width record. Returns the rounded amount written.
pub(crate) fn write_record(
    out: &mut String,
    entry: &RankedEntry,
    config: &SiapConfig,
) -> Result<Decimal, SiapError> {
    let tax_id = tax_id_or(entry.tax_id.as_deref(), &config.missing_tax_id, clean_fixed);

    let amount = round_amount(entry.amount.abs(), config.rounding);
    let amount_field = format_amount_field(amount, config)?;

    out.push_str(&fit(&tax_id, TAX_ID_WIDTH));
    out.push_str(&fit(&clean_fixed(&entry.partner_name), NAME_WIDTH));
    out.push_str(&amount_field);
    out.push_str("\r\n");

    Ok(amount)
}

fn format_amount_field(amount: Decimal, config: &SiapConfig) -> Result<String, SiapError> {
    let plain = format_amount(amount, config.rounding);
    if plain.len() > AMOUNT_WIDTH {
        return Err(SiapError::Format(format!(
            "amount {plain} does not fit in {AMOUNT_WIDTH} characters"
        )));
    }
    Ok(format!("{plain:0>width$}", width = AMOUNT_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PartnerId;
    use rust_decimal_macros::dec;

    fn entry(tax_id: Option<&str>, name: &str, amount: Decimal) -> RankedEntry {
        RankedEntry {
            rank: 1,
            partner_id: PartnerId(1),
            partner_name: name.into(),
            tax_id: tax_id.map(str::to_string),
            amount,
        }
    }

    #[test]
    fn acme_record() {
        let mut out = String::new();
        let written = write_record(
            &mut out,
            &entry(Some("20-12345678-9"), "ACME SA", dec!(1234.5)),
            &SiapConfig::default(),
        )
        .unwrap();
        assert_eq!(written, dec!(1234.50));
        assert_eq!(
            out,
            format!("20-12345678ACME SA{}000000001234.50\r\n", " ".repeat(43))
        );
        assert_eq!(out.chars().count(), RECORD_LEN);
    }

    #[test]
    fn blank_tax_id_uses_placeholder() {
        let mut out = String::new();
        write_record(&mut out, &entry(Some("  "), "BETA SRL", dec!(999)), &SiapConfig::default())
            .unwrap();
        assert!(out.starts_with("SIN CUIT   BETA SRL"));
        assert!(out.ends_with("000000000999.00\r\n"));
    }

    #[test]
    fn largest_amount_that_fits() {
        let mut out = String::new();
        write_record(
            &mut out,
            &entry(None, "X", dec!(999999999999.99)),
            &SiapConfig::default(),
        )
        .unwrap();
        assert!(out.ends_with("999999999999.99\r\n"));
    }

    #[test]
    fn overflowing_amount_is_an_error() {
        let mut out = String::new();
        let err = write_record(
            &mut out,
            &entry(None, "X", dec!(1000000000000)),
            &SiapConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SiapError::Format(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn rounding_mode_is_applied() {
        let half_up = crate::core::SiapConfigBuilder::new()
            .rounding(crate::core::Rounding::HalfUp)
            .build();
        let mut even = String::new();
        let mut up = String::new();
        write_record(&mut even, &entry(None, "X", dec!(0.125)), &SiapConfig::default()).unwrap();
        write_record(&mut up, &entry(None, "X", dec!(0.125)), &half_up).unwrap();
        assert!(even.ends_with("000000000000.12\r\n"));
        assert!(up.ends_with("000000000000.13\r\n"));
    }
}
