//! Trailing `#` comment block appended after the data records.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::text::clean_fixed;
use crate::core::{Rounding, format_amount};

/// Context printed in the summary footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub company_name: String,
    pub generated_at: NaiveDateTime,
}

impl Footer {
    pub fn new(company_name: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self {
            company_name: company_name.into(),
            generated_at,
        }
    }
}

/// Append an empty line and the three summary lines.
pub(crate) fn write_footer(
    out: &mut String,
    record_count: usize,
    total: Decimal,
    footer: &Footer,
    rounding: Rounding,
) {
    out.push_str("\r\n");
    out.push_str(&format!(
        "# SUMMARY: {record_count} records, Total: {}\r\n",
        format_amount(total, rounding)
    ));
    out.push_str(&format!(
        "# Generated on: {}\r\n",
        footer.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    // A line break in the company name would end the comment line early.
    out.push_str(&format!(
        "# Company: {}\r\n",
        clean_fixed(&footer.company_name)
    ));
}
