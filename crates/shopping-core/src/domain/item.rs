//! Item Entity
//!
//! A single shopping-list entry. Price is fixed at creation,
//! only the purchased flag changes afterwards.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Opaque item identifier, unique within a list and never reused
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name (trimmed, non-empty)
    pub name: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Whether the item has been bought
    pub purchased: bool,
}

impl Item {
    /// Validate raw user input and build a new, unpurchased item.
    /// An id is only drawn once the input is valid.
    pub fn create(ids: &mut IdGenerator, name: &str, price_text: &str) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let price = parse_price(price_text)?;
        Ok(Self {
            id: ids.next_id(),
            name,
            price,
            purchased: false,
        })
    }

    /// Case-insensitive substring match on the name.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// Trim the name, rejecting empty or whitespace-only input
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parse a price, accepting only finite numbers greater than zero
pub fn parse_price(price_text: &str) -> Result<f64, ValidationError> {
    let price = price_text
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidPrice)?;

    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(price)
}

/// Generates millisecond-timestamp ids that strictly increase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdGenerator {
    last: i64,
    // ids handed out after `last` reached i64::MAX
    spilled: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ItemId {
        let now = chrono::Utc::now().timestamp_millis();
        let Some(after_last) = self.last.checked_add(1) else {
            // No larger number left; suffixed ids never parse back as numbers
            self.spilled += 1;
            return ItemId(format!("{}-{}", self.last, self.spilled));
        };
        let next = now.max(after_last);
        self.last = next;
        ItemId(next.to_string())
    }

    /// Advance past every numeric id in `items` so loaded ids are never handed out again
    pub fn observe(&mut self, items: &[Item]) {
        for item in items {
            if let Ok(value) = item.id.as_str().parse::<i64>() {
                self.last = self.last.max(value);
            }
        }
    }
}
