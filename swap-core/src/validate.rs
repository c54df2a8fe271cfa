//! Amount validation.
//!
//! Two independent checks. The format check is blocking: a malformed edit is
//! refused and the paired field keeps its value. The balance check is
//! advisory: the amount is still converted and shown, only confirmation is
//! held back.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::asset::Asset;
use crate::convert::parse_amount;

/// Grouping separator accepted in typed or pasted amounts.
pub const GROUPING_SEPARATOR: char = ',';

/// Inline error shown under an amount field. The `Display` text is the
/// message the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Please enter numbers only")]
    NumbersOnly,

    #[error("Insufficient {symbol} balance")]
    InsufficientBalance { symbol: String },
}

impl AmountError {
    /// Whether this error stops the paired field from being recomputed.
    pub fn is_blocking(&self) -> bool {
        matches!(self, AmountError::NumbersOnly)
    }
}

/// Remove grouping separators, e.g. `1,000.5` → `1000.5`.
pub fn strip_grouping(raw: &str) -> String {
    raw.chars().filter(|&c| c != GROUPING_SEPARATOR).collect()
}

/// Accept the empty string or digits with at most one decimal point.
pub fn check_format(input: &str) -> Result<(), AmountError> {
    let mut seen_point = false;
    for c in input.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return Err(AmountError::NumbersOnly),
        }
    }
    Ok(())
}

/// Require a non-empty amount to be positive and covered by the balance.
///
/// A bare `.` is not a number yet and passes, like the empty string. A
/// well-formed amount too large to parse can never be covered and fails.
pub fn check_balance(input: &str, asset: &Asset) -> Result<(), AmountError> {
    let Some(value) = parse_amount(input) else {
        if input.is_empty() || input == "." || check_format(input).is_err() {
            return Ok(());
        }
        return Err(AmountError::InsufficientBalance {
            symbol: asset.symbol.clone(),
        });
    };

    if value <= Decimal::ZERO || value > asset.balance {
        return Err(AmountError::InsufficientBalance {
            symbol: asset.symbol.clone(),
        });
    }
    Ok(())
}
