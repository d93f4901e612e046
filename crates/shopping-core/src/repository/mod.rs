//! Repository Layer
//!
//! Key-value storage abstraction, its implementations and the
//! persisted encoding of the item list.

mod traits;
mod codec;
mod memory;
mod sqlite;


pub use traits::KeyValueStore;
pub use codec::{decode_items, encode_items};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
