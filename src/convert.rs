//! Conversion - Pure THB-to-Display-Currency Transform

use thiserror::Error;

use crate::currency::CurrencyCode;
use crate::rates::ExchangeRates;

/// A numeric input to conversion or formatting was not a finite number.
/// Never coerced to 0; always propagated to the caller.
#[derive(Debug, Error)]
#[error("{param} must be a finite number")]
pub struct InvalidAmountError {
    param: &'static str,
}

impl InvalidAmountError {
    pub(crate) fn new(param: &'static str) -> Self {
        Self { param }
    }

    /// Name of the offending parameter.
    pub fn param(&self) -> &'static str {
        self.param
    }
}

/// Converts a THB amount into the target currency.
///
/// Full floating-point precision is preserved; rounding is the
/// formatter's concern. Rejects non-finite input, names the parameter.
pub fn convert_from_thb(
    amount_in_thb: f64,
    currency: CurrencyCode,
    rates: &ExchangeRates,
) -> Result<f64, InvalidAmountError> {
    if !amount_in_thb.is_finite() {
        return Err(InvalidAmountError::new("amount_in_thb"));
    }
    Ok(amount_in_thb * rates.rate(currency))
}
