//! Amount conversion and display formatting.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::asset::AssetKind;
use crate::config::SwapConfig;
use crate::validate::{check_format, GROUPING_SEPARATOR};

/// Parse a well-formed amount string.
///
/// Accepts what the format check accepts, including the partial forms a
/// user passes through while typing (`12.` and `.5`). Returns `None` for the
/// empty string, a bare `.`, malformed input and values too large for a
/// `Decimal`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    if check_format(input).is_err() {
        return None;
    }

    let trimmed = input.strip_suffix('.').unwrap_or(input);
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('.') {
        Decimal::from_str(&format!("0{}", trimmed)).ok()
    } else {
        Decimal::from_str(trimmed).ok()
    }
}

/// Convert an amount between assets at the fixed rate.
///
/// Empty or unparseable input converts to the empty string. The result has
/// exactly the target asset's precision. Out-of-range amounts are not an
/// error here; the balance check reports them.
pub fn convert(config: &SwapConfig, amount: &str, from: AssetKind, to: AssetKind) -> String {
    let Some(value) = parse_amount(amount) else {
        return String::new();
    };

    match value.checked_mul(config.rate(from, to)) {
        Some(converted) => config.asset(to).format_amount(converted),
        None => String::new(),
    }
}

/// Insert grouping separators into the integer part, e.g. `2184.33` →
/// `2,184.33`.
pub fn group_thousands(amount: &str) -> String {
    let (int_part, frac_part) = match amount.find('.') {
        Some(idx) => amount.split_at(idx),
        None => (amount, ""),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(amount.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(*c);
    }
    grouped.push_str(frac_part);
    grouped
}

/// The rate line shown under the form, e.g. `1 ETH = 2,184.33 USDC`.
pub fn rate_label(config: &SwapConfig, from: AssetKind, to: AssetKind) -> String {
    let rate = config.asset(to).format_amount(config.rate(from, to));
    format!(
        "1 {} = {} {}",
        config.asset(from).symbol,
        group_thousands(&rate),
        config.asset(to).symbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_partial_forms() {
        assert_eq!(parse_amount("12."), Some(dec!(12)));
        assert_eq!(parse_amount(".5"), Some(dec!(0.5)));
        assert_eq!(parse_amount("007.10"), Some(dec!(7.1)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("1,000"), None);
    }

    #[test]
    fn test_parse_too_large() {
        assert_eq!(parse_amount("99999999999999999999999999999999"), None);
    }

    #[test]
    fn test_convert_forward() {
        let config = SwapConfig::default();
        assert_eq!(
            convert(&config, "1.00", AssetKind::Coin, AssetKind::Token),
            "2184.33"
        );
        assert_eq!(
            convert(&config, "2.00", AssetKind::Coin, AssetKind::Token),
            "4368.66"
        );
        assert_eq!(
            convert(&config, "0.5", AssetKind::Coin, AssetKind::Token),
            "1092.17"
        );
    }

    #[test]
    fn test_convert_backward() {
        let config = SwapConfig::default();
        assert_eq!(
            convert(&config, "1000", AssetKind::Token, AssetKind::Coin),
            "0.457806"
        );
        assert_eq!(
            convert(&config, "2184.33", AssetKind::Token, AssetKind::Coin),
            "1.000000"
        );
    }

    #[test]
    fn test_convert_empty_and_garbage() {
        let config = SwapConfig::default();
        assert_eq!(convert(&config, "", AssetKind::Coin, AssetKind::Token), "");
        assert_eq!(convert(&config, ".", AssetKind::Coin, AssetKind::Token), "");
        assert_eq!(convert(&config, "abc", AssetKind::Coin, AssetKind::Token), "");
    }

    #[test]
    fn test_convert_overflow_is_empty() {
        let config = SwapConfig::default();
        let huge = "79228162514264337593543950335";
        assert_eq!(convert(&config, huge, AssetKind::Coin, AssetKind::Token), "");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("2184.33"), "2,184.33");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("999.999999"), "999.999999");
        assert_eq!(group_thousands("100000.00"), "100,000.00");
        assert_eq!(group_thousands(""), "");
    }

    #[test]
    fn test_rate_label() {
        let config = SwapConfig::default();
        assert_eq!(
            rate_label(&config, AssetKind::Coin, AssetKind::Token),
            "1 ETH = 2,184.33 USDC"
        );
        assert_eq!(
            rate_label(&config, AssetKind::Token, AssetKind::Coin),
            "1 USDC = 0.000458 ETH"
        );
    }
}
