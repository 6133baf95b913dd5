//! Invoice snapshot model and its edit-state API.
//!
//! The snapshot is the single serializable state of one invoice. All
//! mutation goes through the methods below, and every mutation re-derives
//! the four totals fields; they are never accepted as independent input.

use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::totals::{compute_totals, f64_or_zero, line_amount};

/// Company or client block on an invoice. The original form uses one shape
/// for both; `logo` is only ever populated on the company side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
    pub logo: String,
}

/// Full serializable state of one invoice at a point in time.
///
/// Every field defaults, so sparse client payloads parse; numeric fields
/// deserialize leniently (strings and garbage coerce to 0).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceSnapshot {
    pub invoice_number: String,
    pub issue_date: String,
    pub due_date: String,
    pub currency: String,
    pub invoice_type: String,
    pub language: String,
    pub company: Party,
    pub client: Party,
    pub items: Vec<LineItem>,
    #[serde(deserialize_with = "f64_or_zero")]
    pub tax_rate: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub tax_amount: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub discount_rate: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub discount_amount: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub subtotal: f64,
    #[serde(deserialize_with = "f64_or_zero")]
    pub total: f64,
    pub notes: String,
    pub terms: String,
    pub include_watermark: bool,
}

impl InvoiceSnapshot {
    /// Fresh edit state: empty fields and a single default line item.
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::new()],
            ..Self::default()
        }
    }

    /// Append a default line item and return its id.
    pub fn add_item(&mut self) -> String {
        let item = LineItem::new();
        let id = item.id.clone();
        self.items.push(item);
        self.recalculate();
        id
    }

    /// Remove the item with the given id. Refused (returns false, state
    /// untouched) when it is the last remaining item.
    pub fn remove_item(&mut self, id: &str) -> bool {
        if self.items.len() <= 1 {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.recalculate();
        }
        removed
    }

    /// Returns false when no item has the given id.
    pub fn set_item_description(&mut self, id: &str, description: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.description = description.into();
                true
            }
            None => false,
        }
    }

    pub fn set_item_quantity(&mut self, id: &str, quantity: f64) -> bool {
        self.update_item(id, |item| item.quantity = quantity)
    }

    pub fn set_item_rate(&mut self, id: &str, rate: f64) -> bool {
        self.update_item(id, |item| item.rate = rate)
    }

    pub fn set_tax_rate(&mut self, rate: f64) {
        self.tax_rate = rate;
        self.recalculate();
    }

    pub fn set_discount_rate(&mut self, rate: f64) {
        self.discount_rate = rate;
        self.recalculate();
    }

    /// Recompute every line amount and the derived totals from scratch.
    /// The item list is small (human-entered rows), so the recompute is
    /// always total rather than incremental.
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.amount = line_amount(item.quantity, item.rate);
        }
        let totals = compute_totals(&self.items, self.tax_rate, self.discount_rate, 0.0);
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.discount_amount = totals.discount_amount;
        self.total = totals.total;
    }

    fn update_item(&mut self, id: &str, apply: impl FnOnce(&mut LineItem)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                apply(item);
                item.amount = line_amount(item.quantity, item.rate);
                self.recalculate();
                true
            }
            None => false,
        }
    }
}
