//! List Manager
//!
//! Async facade over `ListState`: loads once at startup, applies intents
//! and hands every `Persist` effect to the save writer.

use std::sync::Arc;

use crate::domain::{DomainResult, Effect, Intent, Item, ItemId, ListState, ListView};
use crate::repository::{decode_items, KeyValueStore};

use super::config::ManagerConfig;
use super::writer::{SaveWriter, WriterStats};

pub struct ListManager {
    state: ListState,
    store: Arc<dyn KeyValueStore>,
    writer: SaveWriter,
    config: ManagerConfig,
    loaded: bool,
}

impl ListManager {
    /// Create an empty manager. Must be called inside a tokio runtime
    /// since it spawns the save writer.
    pub fn new(store: Arc<dyn KeyValueStore>, config: ManagerConfig) -> Self {
        let writer = SaveWriter::spawn(store.clone(), config.storage_key.clone(), config.save_debounce);
        Self {
            state: ListState::new(),
            store,
            writer,
            config,
            loaded: false,
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        self.state.items()
    }

    pub fn view(&self) -> ListView {
        self.state.view()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Hydrate the list from storage. Only the first call reads;
    /// failures are logged and leave the list empty.
    pub async fn load(&mut self) -> ListView {
        if self.loaded {
            log::debug!("List already loaded, skipping");
            return self.view();
        }
        self.loaded = true;

        match self.read_stored_items().await {
            Ok(Some(items)) => {
                log::info!("Loaded {} items", items.len());
                self.state.replace_items(items);
            }
            Ok(None) => log::info!("No saved list under '{}'", self.config.storage_key),
            Err(e) => {
                log::error!("Failed to load items: {}", e);
                self.state.replace_items(Vec::new());
            }
        }

        self.view()
    }

    /// Queue a full save of the current list
    pub fn save(&mut self) {
        self.writer.submit(self.state.items().to_vec());
    }

    /// Apply one user intent and run its effects. List changes are
    /// ignored until `load` has run, so a stored list is never overwritten
    /// by one that was never read.
    pub fn dispatch(&mut self, intent: Intent) -> DomainResult<ListView> {
        if intent.changes_list() && !self.loaded {
            log::warn!("Ignoring {:?} before the list is loaded", intent);
            return Ok(self.view());
        }
        let effects = self.state.apply(intent)?;
        self.run_effects(effects);
        Ok(self.view())
    }

    pub fn add_item(&mut self, name: &str, price_text: &str) -> DomainResult<ListView> {
        if !self.loaded {
            log::warn!("Ignoring add of '{}' before the list is loaded", name);
            return Ok(self.view());
        }
        let effects = self.state.add_item(name, price_text)?;
        self.run_effects(effects);
        Ok(self.view())
    }

    pub fn toggle_purchased(&mut self, id: ItemId) -> DomainResult<ListView> {
        self.dispatch(Intent::TogglePurchased(id))
    }

    pub fn remove_item(&mut self, id: ItemId) -> DomainResult<ListView> {
        self.dispatch(Intent::RemoveItem(id))
    }

    pub fn clear_all(&mut self) -> DomainResult<ListView> {
        self.dispatch(Intent::ClearAll)
    }

    pub fn set_search_query(&mut self, query: String) -> DomainResult<ListView> {
        self.dispatch(Intent::SetSearchQuery(query))
    }

    pub fn toggle_theme(&mut self) -> DomainResult<ListView> {
        self.dispatch(Intent::ToggleTheme)
    }

    pub fn set_draft_name(&mut self, text: String) -> DomainResult<ListView> {
        self.dispatch(Intent::SetDraftName(text))
    }

    pub fn set_draft_price(&mut self, text: String) -> DomainResult<ListView> {
        self.dispatch(Intent::SetDraftPrice(text))
    }

    /// Wait for all queued saves to reach storage
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Drain pending saves and stop the writer
    pub async fn shutdown(self) -> WriterStats {
        self.writer.shutdown().await
    }

    async fn read_stored_items(&self) -> DomainResult<Option<Vec<Item>>> {
        match self.store.get(&self.config.storage_key).await? {
            Some(data) => Ok(Some(decode_items(&data)?)),
            None => Ok(None),
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Persist(items) => {
                    self.writer.submit(items);
                }
            }
        }
    }
}
