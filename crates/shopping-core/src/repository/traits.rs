//! Repository Layer - Core Traits
//!
//! The persisted store is an opaque async key-value interface.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Async key-value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}
