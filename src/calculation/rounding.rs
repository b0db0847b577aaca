//! Money rounding and formatting.

use rust_decimal::Decimal;

/// Rounds a monetary amount to two fractional digits.
///
/// Midpoints round to even, and the result always carries a scale of two so
/// `125` is reported as `125.00`.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.345").unwrap()).to_string(), "2.34");
/// assert_eq!(round_money(Decimal::from(4500)).to_string(), "4500.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Formats an amount with a currency symbol and two decimals, e.g. `Q4500.00`.
pub(crate) fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, round_money(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_money_uses_bankers_rounding() {
        assert_eq!(round_money(dec("0.125")), dec("0.12"));
        assert_eq!(round_money(dec("0.135")), dec("0.14"));
    }

    #[test]
    fn test_round_money_pads_scale() {
        assert_eq!(round_money(dec("7")).to_string(), "7.00");
        assert_eq!(round_money(dec("7.1")).to_string(), "7.10");
    }

    #[test]
    fn test_round_money_recovers_repeating_division() {
        let amount = dec("250") / dec("30") * dec("15");
        assert_eq!(round_money(amount).to_string(), "125.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("Q", dec("4496.9199")), "Q4496.92");
    }
}
