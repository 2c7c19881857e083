//! Per-sale profit under tiered royalty rules.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::round_cents;
use crate::error::PricingError;

/// Publication format class. Each class has independent royalty rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Ebook,
    Paperback,
    Hardcover,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ebook => "ebook",
            Self::Paperback => "paperback",
            Self::Hardcover => "hardcover",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ebook" => Ok(Self::Ebook),
            "paperback" => Ok(Self::Paperback),
            "hardcover" => Ok(Self::Hardcover),
            other => Err(format!(
                "unknown format '{other}' (expected ebook, paperback, or hardcover)"
            )),
        }
    }
}

/// Optional cost inputs; unset fields fall back to the configured defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostInputs {
    /// Ebook file size in megabytes, drives the delivery cost.
    pub file_size_mb: Option<Decimal>,
    /// Per-unit printing cost for print formats.
    pub printing_cost: Option<Decimal>,
}

/// Royalty tiers and cost defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfitConfig {
    /// Lower bound of the high-royalty ebook band.
    pub ebook_band_low: Decimal,
    /// Upper bound of the high-royalty ebook band.
    pub ebook_band_high: Decimal,
    pub ebook_high_royalty: Decimal,
    pub ebook_low_royalty: Decimal,
    /// Delivery cost per megabyte, charged only in the high-royalty tier.
    pub delivery_per_mb: Decimal,
    pub default_file_size_mb: Decimal,

    pub print_royalty: Decimal,
    pub paperback_printing_cost: Decimal,
    pub hardcover_printing_cost: Decimal,
    /// A print price below `printing_cost × print_min_markup` is rejected.
    pub print_min_markup: Decimal,
    pub paperback_band_low_markup: Decimal,
    pub paperback_band_high_markup: Decimal,
    pub hardcover_band_low_markup: Decimal,
    pub hardcover_band_high_markup: Decimal,
}

impl Default for ProfitConfig {
    fn default() -> Self {
        Self {
            ebook_band_low: dec!(2.99),
            ebook_band_high: dec!(9.99),
            ebook_high_royalty: dec!(0.70),
            ebook_low_royalty: dec!(0.35),
            delivery_per_mb: dec!(0.15),
            default_file_size_mb: dec!(2),
            print_royalty: dec!(0.60),
            paperback_printing_cost: dec!(3.00),
            hardcover_printing_cost: dec!(5.50),
            print_min_markup: dec!(1.2),
            paperback_band_low_markup: dec!(1.5),
            paperback_band_high_markup: dec!(3),
            hardcover_band_low_markup: dec!(2),
            hardcover_band_high_markup: dec!(4),
        }
    }
}

/// The pricing band recommended alongside a profit figure.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedRange {
    pub min: Decimal,
    pub max: Decimal,
    pub reason: String,
}

/// Per-sale profit breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ProfitBreakdown {
    pub profit_per_sale: Decimal,
    pub royalty_rate_percent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printing_cost: Option<Decimal>,
    pub recommended_range: RecommendedRange,
}

/// Compute per-sale profit for `price` under the rules of `format`.
///
/// Print formats reject prices below the minimum viable markup with a
/// [`PricingError::PriceTooLow`] carrying the computed minimum, so the
/// caller can correct and retry.
pub fn calculate_profit(
    price: Decimal,
    format: Format,
    inputs: &CostInputs,
    config: &ProfitConfig,
) -> Result<ProfitBreakdown, PricingError> {
    match format {
        Format::Ebook => Ok(ebook_profit(price, inputs, config)),
        Format::Paperback => print_profit(
            price,
            inputs.printing_cost.unwrap_or(config.paperback_printing_cost),
            config.paperback_band_low_markup,
            config.paperback_band_high_markup,
            "Competitive pricing for paperback",
            config,
        ),
        Format::Hardcover => print_profit(
            price,
            inputs.printing_cost.unwrap_or(config.hardcover_printing_cost),
            config.hardcover_band_low_markup,
            config.hardcover_band_high_markup,
            "Premium pricing for hardcover",
            config,
        ),
    }
}

fn ebook_profit(price: Decimal, inputs: &CostInputs, config: &ProfitConfig) -> ProfitBreakdown {
    let in_high_band = price >= config.ebook_band_low && price <= config.ebook_band_high;
    let (rate, delivery_cost) = if in_high_band {
        let file_size = inputs.file_size_mb.unwrap_or(config.default_file_size_mb);
        (config.ebook_high_royalty, file_size * config.delivery_per_mb)
    } else {
        (config.ebook_low_royalty, Decimal::ZERO)
    };

    let profit = price * rate - delivery_cost;

    ProfitBreakdown {
        profit_per_sale: round_cents(profit),
        royalty_rate_percent: rate_percent(rate),
        delivery_cost: Some(round_cents(delivery_cost)),
        printing_cost: None,
        recommended_range: RecommendedRange {
            min: config.ebook_band_low,
            max: config.ebook_band_high,
            reason: "70% royalty tier for ebooks".to_string(),
        },
    }
}

fn print_profit(
    price: Decimal,
    printing_cost: Decimal,
    band_low_markup: Decimal,
    band_high_markup: Decimal,
    reason: &str,
    config: &ProfitConfig,
) -> Result<ProfitBreakdown, PricingError> {
    let min_price = printing_cost * config.print_min_markup;
    if price < min_price {
        return Err(PricingError::PriceTooLow {
            min_price: round_cents(min_price),
        });
    }

    let profit = (price - printing_cost) * config.print_royalty;

    Ok(ProfitBreakdown {
        profit_per_sale: round_cents(profit),
        royalty_rate_percent: rate_percent(config.print_royalty),
        delivery_cost: None,
        printing_cost: Some(round_cents(printing_cost)),
        recommended_range: RecommendedRange {
            min: round_cents(printing_cost * band_low_markup),
            max: round_cents(printing_cost * band_high_markup),
            reason: reason.to_string(),
        },
    })
}

fn rate_percent(rate: Decimal) -> u32 {
    (rate * dec!(100)).trunc().to_u32().unwrap_or(0)
}
