//! Persisted encoding of the item list (JSON array)

use crate::domain::{DomainResult, Item};

pub fn encode_items(items: &[Item]) -> DomainResult<String> {
    Ok(serde_json::to_string(items)?)
}

pub fn decode_items(data: &str) -> DomainResult<Vec<Item>> {
    Ok(serde_json::from_str(data)?)
}
