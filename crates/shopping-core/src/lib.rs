//! Shopping List Core
//!
//! Layered like the app backend:
//! - domain: Item, validation, list state and derived views
//! - repository: Key-value storage abstraction and implementations
//! - manager: Async facade that loads state and persists it through a debounced writer

pub mod domain;
pub mod repository;
pub mod manager;

pub use domain::{
    filter_items, total_remaining, DomainError, DomainResult, Effect, IdGenerator, Intent, Item,
    ItemId, ListState, ListView, ValidationError,
};
pub use manager::{ListManager, ManagerConfig, SaveWriter, WriterStats, DEFAULT_STORAGE_KEY};
pub use repository::{decode_items, encode_items, KeyValueStore, MemoryStore, SqliteStore};
