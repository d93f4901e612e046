//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Fixed currency label shown after prices
pub const CURRENCY_LABEL: &str = "บาท";

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub purchased: bool,
}

/// Screen snapshot returned by every list command (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    pub items: Vec<Item>,
    pub filtered_items: Vec<Item>,
    pub total_remaining: f64,
    pub dark_mode: bool,
    pub search_query: String,
    pub draft_name: String,
    pub draft_price: String,
}
