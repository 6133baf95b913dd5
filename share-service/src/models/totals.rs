//! Invoice totals arithmetic.
//!
//! Pure and total: every input in the numeric domain produces a result,
//! nothing is clamped or rejected. Range validation (negative quantities,
//! rates above 100) is a concern of whatever edits the invoice, not of the
//! arithmetic.

use serde::{Deserialize, Deserializer};

use super::line_item::LineItem;

/// Derived financial totals of one invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub discount_amount: f64,
    pub total: f64,
}

/// Amount of a single line: `quantity * rate`.
pub fn line_amount(quantity: f64, rate: f64) -> f64 {
    num(quantity) * num(rate)
}

/// Derive subtotal, tax, discount and grand total from line items and the
/// two percentage rates. `shipping` is a flat addition, 0 when not used.
///
/// Subtotal is recomputed from each item's quantity and rate, so a stale
/// `amount` field on an incoming item cannot skew the result.
pub fn compute_totals(
    items: &[LineItem],
    tax_rate: f64,
    discount_rate: f64,
    shipping: f64,
) -> InvoiceTotals {
    let subtotal: f64 = items
        .iter()
        .map(|item| line_amount(item.quantity, item.rate))
        .sum();
    let tax_amount = subtotal * num(tax_rate) / 100.0;
    let discount_amount = subtotal * num(discount_rate) / 100.0;
    let total = subtotal + tax_amount - discount_amount + num(shipping);

    InvoiceTotals {
        subtotal,
        tax_amount,
        discount_amount,
        total,
    }
}

/// Anything that is not a finite number is treated as 0, so `NaN` and the
/// infinities never propagate into totals.
pub fn num(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Lenient numeric deserialization for client-supplied fields: accepts a
/// JSON number, a numeric string, or garbage; everything unparsable
/// becomes 0. Combined with `#[serde(default)]`, a missing field is 0 too.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Num(n) => num(n),
        Loose::Text(s) => s.trim().parse::<f64>().map(num).unwrap_or(0.0),
        Loose::Other(_) => 0.0,
    })
}
