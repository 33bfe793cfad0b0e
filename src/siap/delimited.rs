//! Pipe-delimited records: `CUIT|name|amount` followed by CRLF.

use rust_decimal::Decimal;

use super::text::{clean_delimited, tax_id_or};
use crate::core::{RankedEntry, SiapConfig, format_amount, round_amount};

/// Field separator.
pub const SEPARATOR: char = '|';

/// Append one delimited record. Returns the rounded amount written.
pub(crate) fn write_record(out: &mut String, entry: &RankedEntry, config: &SiapConfig) -> Decimal {
    let tax_id = tax_id_or(entry.tax_id.as_deref(), &config.missing_tax_id, clean_delimited);
    let amount = round_amount(entry.amount.abs(), config.rounding);

    out.push_str(&tax_id);
    out.push(SEPARATOR);
    out.push_str(&clean_delimited(&entry.partner_name));
    out.push(SEPARATOR);
    out.push_str(&format_amount(amount, config.rounding));
    out.push_str("\r\n");

    amount
}
