//! Line item model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::totals::f64_or_zero;

/// One row of an invoice. `amount` is always `quantity * rate`; the
/// snapshot's mutators recompute it and never accept it as input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub rate: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub amount: f64,
}

impl LineItem {
    /// A fresh, empty row as the form creates it: quantity 1, rate 0.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            quantity: 1.0,
            rate: 0.0,
            amount: 0.0,
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}
