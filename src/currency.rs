//! Currency Codes - Closed Display-Currency Set
//!
//! The supported currencies are a fixed set, not an open string type.
//! Untrusted input goes through `is_currency_code` before it is ever
//! treated as a `CurrencyCode`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported display currency. All catalog prices are stored in THB and
/// converted into one of these for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Thb,
    Usd,
    Eur,
    Rub,
}

impl CurrencyCode {
    /// Every supported currency, in canonical order.
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::Thb,
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Rub,
    ];

    /// ISO 4217 code.
    pub const fn code(self) -> &'static str {
        match self {
            CurrencyCode::Thb => "THB",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Rub => "RUB",
        }
    }

    /// Display symbol used by the formatter.
    pub const fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::Thb => "\u{e3f}",  // ฿
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "\u{20ac}", // €
            CurrencyCode::Rub => "\u{20bd}", // ₽
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("unsupported currency code: {0}")]
pub struct UnsupportedCurrencyError(pub String);

impl FromStr for CurrencyCode {
    type Err = UnsupportedCurrencyError;

    /// Exact match only. Case-mismatched input is rejected, same as the guard.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .into_iter()
            .find(|c| c.code() == value)
            .ok_or_else(|| UnsupportedCurrencyError(value.to_string()))
    }
}

/// Checks whether a raw string is a supported currency code.
///
/// Used to sanitize untrusted input (a client-supplied display preference)
/// before it is treated as a `CurrencyCode`. Never panics; callers fall
/// back to the base currency on `false`.
pub fn is_currency_code(value: &str) -> bool {
    CurrencyCode::ALL.iter().any(|c| c.code() == value)
}
