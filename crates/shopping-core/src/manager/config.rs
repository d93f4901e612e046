use std::time::Duration;

/// Storage key holding the serialized list
pub const DEFAULT_STORAGE_KEY: &str = "shoppingItems";

/// Quiet period before a pending save is written
const DEFAULT_SAVE_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Key the list is stored under
    pub storage_key: String,
    /// How long the writer waits for further changes before saving
    pub save_debounce: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            save_debounce: DEFAULT_SAVE_DEBOUNCE,
        }
    }
}

impl ManagerConfig {
    pub fn with_debounce(mut self, save_debounce: Duration) -> Self {
        self.save_debounce = save_debounce;
        self
    }
}
