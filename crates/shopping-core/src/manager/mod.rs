//! Manager Layer
//!
//! Owns the list state, runs transition effects and keeps storage in sync.

mod config;
mod list_manager;
mod writer;

#[cfg(test)]
mod tests;

pub use config::{ManagerConfig, DEFAULT_STORAGE_KEY};
pub use list_manager::ListManager;
pub use writer::{SaveWriter, WriterStats};
