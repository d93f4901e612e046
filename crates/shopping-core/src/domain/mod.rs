//! Domain Layer
//!
//! Shopping list entities, validation rules and pure state transitions.
//! Nothing in here performs I/O.

mod error;
mod item;
mod list;
mod state;

pub use error::{DomainError, DomainResult, ValidationError};
pub use item::{IdGenerator, Item, ItemId};
pub use list::{filter_items, total_remaining};
pub use state::{Effect, Intent, ListState, ListView};
