//! Display formatting for engine output.
//!
//! Currency amounts are shown without decimals and with grouped thousands;
//! percentages with one decimal place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Separator and symbol conventions for formatting amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    /// Separator between groups of three digits.
    pub group_separator: char,
    /// Currency symbol.
    pub currency_symbol: String,
    /// Whether the symbol follows the amount (`"1 000 kr"`) or precedes it (`"$1,000"`).
    pub symbol_after: bool,
}

impl NumberLocale {
    /// Swedish conventions: `"1 234 567 kr"`.
    pub fn sv_se() -> Self {
        Self {
            group_separator: '\u{a0}',
            currency_symbol: "kr".to_string(),
            symbol_after: true,
        }
    }

    /// US conventions: `"$1,234,567"`.
    pub fn en_us() -> Self {
        Self {
            group_separator: ',',
            currency_symbol: "$".to_string(),
            symbol_after: false,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::sv_se()
    }
}

/// Formats an amount in the default (Swedish) locale with no decimals.
///
/// Groups are separated by a no-break space.
///
/// # Example
///
/// ```
/// use planning_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(432000, 0)), "432\u{a0}000\u{a0}kr");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format_currency_with(value, &NumberLocale::default())
}

/// Formats an amount with no decimals in the given locale.
///
/// ```
/// use planning_engine::format::{format_currency_with, NumberLocale};
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(-123456789, 2);
/// assert_eq!(format_currency_with(amount, &NumberLocale::en_us()), "-$1,234,568");
/// ```
pub fn format_currency_with(value: Decimal, locale: &NumberLocale) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_digits(&digits, locale.group_separator);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if locale.symbol_after {
        format!("{}{}\u{a0}{}", sign, grouped, locale.currency_symbol)
    } else {
        format!("{}{}{}", sign, locale.currency_symbol, grouped)
    }
}

/// Formats a percentage value with one decimal place.
///
/// The value is already in percent: `12.345` becomes `"12.3%"`.
///
/// ```
/// use planning_engine::format::format_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percentage(Decimal::new(12345, 3)), "12.3%");
/// assert_eq!(format_percentage(Decimal::ZERO), "0.0%");
/// ```
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
