//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the list manager.

mod list_cmd;

pub use list_cmd::*;
