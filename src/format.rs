//! Monetary Formatting - Locale-Aware Display Strings
//!
//! Exactly 2 fraction digits, thousands grouping and decimal separator
//! per locale, currency symbol placed where the locale puts it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::{convert_from_thb, InvalidAmountError};
use crate::currency::CurrencyCode;
use crate::rates::ExchangeRates;

const NBSP: char = '\u{a0}';

/// Supported display locale. Closed set, like the currency codes:
/// an unrecognized tag fails at the parse boundary, not mid-format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// "ru-RU": comma decimal, no-break-space grouping, symbol after.
    #[default]
    #[serde(rename = "ru-RU")]
    RuRu,
    /// "en-US": dot decimal, comma grouping, symbol before.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::RuRu => "ru-RU",
            Locale::EnUs => "en-US",
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Locale::RuRu => ',',
            Locale::EnUs => '.',
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Locale::RuRu => NBSP,
            Locale::EnUs => ',',
        }
    }

    const fn symbol_first(self) -> bool {
        match self {
            Locale::RuRu => false,
            Locale::EnUs => true,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error)]
#[error("unknown locale: {0}")]
pub struct UnknownLocaleError(pub String);

impl FromStr for Locale {
    type Err = UnknownLocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ru-RU" => Ok(Locale::RuRu),
            "en-US" => Ok(Locale::EnUs),
            other => Err(UnknownLocaleError(other.to_string())),
        }
    }
}

/// Formats an amount already denominated in `currency` as a localized
/// monetary string. Rejects non-finite input, names the parameter.
pub fn format_currency(
    amount: f64,
    currency: CurrencyCode,
    locale: Locale,
) -> Result<String, InvalidAmountError> {
    if !amount.is_finite() {
        return Err(InvalidAmountError::new("amount"));
    }

    let rounded = format!("{:.2}", amount.abs());
    let (int_digits, frac_digits) = match rounded.split_once('.') {
        Some(parts) => parts,
        None => (rounded.as_str(), "00"),
    };

    let mut number = group_digits(int_digits, locale.group_separator());
    number.push(locale.decimal_separator());
    number.push_str(frac_digits);

    let sign = if amount < 0.0 { "-" } else { "" };
    let formatted = if locale.symbol_first() {
        format!("{sign}{}{number}", currency.symbol())
    } else {
        format!("{sign}{number}{NBSP}{}", currency.symbol())
    };

    Ok(formatted)
}

/// Converts a THB amount and formats it in one step. The sole entry point
/// used by presentation code; propagates its constituents' failures and
/// adds no validation of its own.
pub fn format_price_from_thb(
    amount_in_thb: f64,
    currency: CurrencyCode,
    locale: Locale,
    rates: &ExchangeRates,
) -> Result<String, InvalidAmountError> {
    let converted = convert_from_thb(amount_in_thb, currency, rates)?;
    format_currency(converted, currency, locale)
}

/// Inserts `separator` between thousands groups. Input is the ASCII
/// integer-digit run produced by float formatting.
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
