//! Exchange Rate Table - Validate Once, Read Forever
//!
//! Rates are loaded from static configuration, validated eagerly, and
//! never mutated afterwards. A table value always carries a rate for
//! every supported currency, so conversion lookups cannot fail.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

use crate::currency::CurrencyCode;

#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("exchange rates must be a JSON object")]
    NotAnObject,

    #[error("exchange rate for {0} is missing")]
    MissingCurrency(CurrencyCode),

    #[error("exchange rate for {currency} must be a positive finite number, got {value}")]
    InvalidRate { currency: CurrencyCode, value: Value },

    #[error("failed to read exchange rates: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse exchange rates: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated conversion factors from THB into each supported currency.
///
/// `rate(c)` is the amount of currency `c` equal to 1 THB. The base
/// currency's own rate is 1 by convention. The only public constructors
/// run full validation, so every instance holds a positive finite rate
/// for every `CurrencyCode` variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRates {
    rates: [f64; CurrencyCode::ALL.len()],
}

impl ExchangeRates {
    /// Conversion factor from THB into `currency`. Infallible: the table
    /// is total over the supported currency set by construction.
    pub fn rate(&self, currency: CurrencyCode) -> f64 {
        self.rates[currency.index()]
    }

    /// All entries in canonical currency order.
    pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, f64)> + '_ {
        CurrencyCode::ALL.into_iter().map(|c| (c, self.rate(c)))
    }

    /// Reads and validates a rate table from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, RateTableError> {
        let content = fs::read_to_string(path)?;
        let candidate: Value = serde_json::from_str(&content)?;
        validate_exchange_rates(&candidate)
    }
}

/// Validates a candidate rate table and normalizes it into `ExchangeRates`.
///
/// Rejects anything that is not a JSON object, a table missing any
/// supported currency, and any rate that is not a positive finite number.
/// The error names the offending currency. Keys outside the supported set
/// are dropped, not errored.
pub fn validate_exchange_rates(candidate: &Value) -> Result<ExchangeRates, RateTableError> {
    let map = candidate.as_object().ok_or(RateTableError::NotAnObject)?;

    let mut rates = [0.0; CurrencyCode::ALL.len()];
    for currency in CurrencyCode::ALL {
        let value = map
            .get(currency.code())
            .ok_or(RateTableError::MissingCurrency(currency))?;

        // JSON numbers are finite by construction; anything non-numeric
        // (including a null produced from NaN/Infinity upstream) fails here.
        let rate = match value.as_f64() {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => {
                return Err(RateTableError::InvalidRate {
                    currency,
                    value: value.clone(),
                })
            }
        };

        rates[currency.index()] = rate;
    }

    Ok(ExchangeRates { rates })
}

static DEFAULT_RATES: Lazy<ExchangeRates> = Lazy::new(|| {
    let candidate: Value = serde_json::from_str(include_str!("../config/exchange_rates.json"))
        .expect("bundled exchange_rates.json is not valid JSON");
    // A malformed bundled table aborts before any conversion is served.
    validate_exchange_rates(&candidate).expect("bundled exchange_rates.json failed validation")
});

/// The canonical rate table bundled with the crate, validated on first use.
pub fn default_exchange_rates() -> &'static ExchangeRates {
    &DEFAULT_RATES
}
