//! The two mock assets offered by the swap form.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Which of the two assets a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// The volatile coin, priced against the token by the fixed rate.
    Coin,
    /// The USD-pegged stable token.
    Token,
}

impl AssetKind {
    /// The asset on the other side of the pair.
    pub fn other(self) -> Self {
        match self {
            AssetKind::Coin => AssetKind::Token,
            AssetKind::Token => AssetKind::Coin,
        }
    }
}

/// A mock currency with a fixed balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub symbol: String,
    /// Icon file name, resolved against the icons bundled with the GUI.
    pub icon: String,
    pub balance: Decimal,
    /// Number of decimal places amounts of this asset are shown with.
    pub precision: u32,
}

impl Asset {
    /// Format a value with exactly `precision` decimal places.
    ///
    /// Midpoints round away from zero and trailing zeros are kept, so
    /// `2184.33` at precision 6 renders as `2184.330000`.
    pub fn format_amount(&self, value: Decimal) -> String {
        let mut rounded =
            value.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.precision);
        rounded.to_string()
    }

    /// Balance formatted for the currency row, e.g. `3.500000 ETH`.
    pub fn balance_label(&self) -> String {
        format!("{} {}", self.format_amount(self.balance), self.symbol)
    }
}
