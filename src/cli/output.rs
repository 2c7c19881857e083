//! Shared display helpers for command output.

use rust_decimal::Decimal;

use crate::domain::round_cents;

/// Format an optional price as `$x.xx`, or a dash when absent.
pub fn fmt_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) => format!("${:.2}", round_cents(p)),
        None => "-".to_string(),
    }
}

/// Format an optional rating at one decimal, or a dash when absent.
pub fn fmt_rating(rating: Option<Decimal>) -> String {
    match rating {
        Some(r) => format!("{r:.1}"),
        None => "-".to_string(),
    }
}

/// Format an optional count, or a dash when absent.
pub fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Section divider used by the summary-style commands.
pub fn rule() -> &'static str {
    "─────────────────────────────────────────────────────────"
}
