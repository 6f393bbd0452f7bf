//! Property Catalog CLI - Presentation Boundary
//!
//! Commands: rates, convert, price, properties
//! Outputs JSON to stdout
//! Returns non-zero on failure
//!
//! A raw `--currency` value is sanitized with the currency-code guard;
//! anything unsupported falls back to THB rather than erroring.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use proplist_core::{
    convert_from_thb, default_exchange_rates, format_price_from_thb, is_currency_code,
    CurrencyCode, ExchangeRates, Locale, PropertyCatalog, BASE_CURRENCY,
};

#[derive(Parser)]
#[command(name = "proplist-cli")]
#[command(about = "Property Catalog CLI - currency conversion and listing data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to an alternate exchange-rate table (defaults to the bundled one)
    #[arg(short, long)]
    rates_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the validated exchange-rate table
    Rates,

    /// Convert a THB amount into a target currency
    Convert {
        /// Amount in THB
        #[arg(short, long)]
        amount: f64,

        /// Target currency code
        #[arg(short, long)]
        currency: CurrencyCode,
    },

    /// Convert and format a THB price for display
    Price {
        /// Amount in THB
        #[arg(short, long)]
        amount: f64,

        /// Raw display currency preference (falls back to THB when unsupported)
        #[arg(short, long)]
        currency: Option<String>,

        /// Display locale tag
        #[arg(short, long, default_value_t = Locale::RuRu)]
        locale: Locale,
    },

    /// List catalog properties with display prices
    Properties {
        /// Path to the property listing file
        #[arg(short, long, default_value = "config/properties.json")]
        data_file: PathBuf,

        /// Raw display currency preference (falls back to THB when unsupported)
        #[arg(short, long)]
        currency: Option<String>,

        /// Display locale tag
        #[arg(short, long, default_value_t = Locale::RuRu)]
        locale: Locale,
    },
}

/// Display-boundary policy: an unsupported or absent preference silently
/// falls back to the base currency, it never errors.
fn sanitize_currency(raw: Option<&str>) -> CurrencyCode {
    match raw {
        Some(value) if is_currency_code(value) => value.parse().unwrap_or(BASE_CURRENCY),
        _ => BASE_CURRENCY,
    }
}

fn load_rates(path: Option<&PathBuf>) -> Result<ExchangeRates, String> {
    match path {
        Some(p) => ExchangeRates::load_from_file(p).map_err(|e| e.to_string()),
        None => Ok(default_exchange_rates().clone()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let rates = match load_rates(cli.rates_file.as_ref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!(r#"{{"error": "Failed to load exchange rates: {}"}}"#, e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Rates => {
            let table: serde_json::Map<_, _> = rates
                .iter()
                .map(|(c, r)| (c.code().to_string(), serde_json::json!(r)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&table).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Convert { amount, currency } => {
            match convert_from_thb(amount, currency, &rates) {
                Ok(converted) => {
                    let output = serde_json::json!({
                        "amount_in_thb": amount,
                        "currency": currency,
                        "converted": converted,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Price {
            amount,
            currency,
            locale,
        } => {
            let currency = sanitize_currency(currency.as_deref());
            match format_price_from_thb(amount, currency, locale, &rates) {
                Ok(formatted) => {
                    let output = serde_json::json!({
                        "currency": currency,
                        "locale": locale,
                        "formatted": formatted,
                    });
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Properties {
            data_file,
            currency,
            locale,
        } => {
            let catalog = match PropertyCatalog::load_from_file(&data_file) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!(r#"{{"error": "Failed to load properties: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let currency = sanitize_currency(currency.as_deref());
            let mut listings = Vec::with_capacity(catalog.len());
            for item in catalog.items() {
                let price = match format_price_from_thb(item.price, currency, locale, &rates) {
                    Ok(p) => p,
                    Err(e) => {
                        println!(r#"{{"error": "{}"}}"#, e);
                        return ExitCode::from(2);
                    }
                };
                listings.push(serde_json::json!({
                    "name": item.name,
                    "description": item.description,
                    "price": price,
                    "area": item.area,
                    "tags": item.tags,
                    "image": item.image,
                    "contacts": item.contacts,
                }));
            }

            println!("{}", serde_json::to_string_pretty(&listings).unwrap());
            ExitCode::SUCCESS
        }
    }
}
