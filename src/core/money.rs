//! Monetary rounding and amount formatting.
//!
//! Every amount written to a SIAP file goes through [`round_amount`], so the
//! records and the summary footer always agree to the cent.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places of every monetary amount in the export.
pub const AMOUNT_SCALE: u32 = 2;

/// Rounding mode for monetary amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round half to even (banker's rounding), as `Decimal::round_dp` does.
    #[default]
    HalfEven,
    /// Round half away from zero.
    HalfUp,
}

impl Rounding {
    fn strategy(&self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

/// Round to two decimal places.
pub fn round_amount(amount: Decimal, rounding: Rounding) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, rounding.strategy())
}

/// Plain two-decimal representation, e.g. `1234.50`.
pub fn format_amount(amount: Decimal, rounding: Rounding) -> String {
    format!("{:.2}", round_amount(amount, rounding))
}

/// Two-decimal representation with `,` thousands separators, e.g. `1,234.50`.
pub fn format_grouped(amount: Decimal, rounding: Rounding) -> String {
    let rounded = round_amount(amount, rounding);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}
