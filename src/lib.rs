//! Property Catalog Core
//!
//! Owns the only real logic behind the catalog site:
//! a validated, immutable exchange-rate table, THB-to-display-currency
//! conversion, locale-aware price formatting, and the listing data shape.
//! Everything is a stateless pure transform; the rate table is validated
//! once and read-only for the life of the process.

pub mod convert;
pub mod currency;
pub mod format;
pub mod properties;
pub mod rates;

pub use convert::{convert_from_thb, InvalidAmountError};
pub use currency::{is_currency_code, CurrencyCode, UnsupportedCurrencyError};
pub use format::{format_currency, format_price_from_thb, Locale, UnknownLocaleError};
pub use properties::{CatalogError, PropertyCatalog, PropertyContacts, PropertyItem};
pub use rates::{default_exchange_rates, validate_exchange_rates, ExchangeRates, RateTableError};

/// All stored amounts are denominated in THB before conversion.
pub const BASE_CURRENCY: CurrencyCode = CurrencyCode::Thb;

pub const DEFAULT_LOCALE: Locale = Locale::RuRu;
