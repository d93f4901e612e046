//! List State
//!
//! The screen's complete state with one transition per user intent.
//! Transitions mutate in memory and return the effects they produced;
//! the caller decides how to run them.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::item::{IdGenerator, Item, ItemId};
use super::list::{filter_items, total_remaining};

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the full list to storage
    Persist(Vec<Item>),
}

/// User intents coming from the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetDraftName(String),
    SetDraftPrice(String),
    /// Add an item from the current draft fields
    AddItem,
    TogglePurchased(ItemId),
    RemoveItem(ItemId),
    ClearAll,
    SetSearchQuery(String),
    ToggleTheme,
}

impl Intent {
    /// True for intents that change the stored list
    pub fn changes_list(&self) -> bool {
        matches!(
            self,
            Intent::AddItem | Intent::TogglePurchased(_) | Intent::RemoveItem(_) | Intent::ClearAll
        )
    }
}

/// Snapshot handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    pub items: Vec<Item>,
    pub filtered_items: Vec<Item>,
    pub total_remaining: f64,
    pub dark_mode: bool,
    pub search_query: String,
    pub draft_name: String,
    pub draft_price: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
    search_query: String,
    dark_mode: bool,
    draft_name: String,
    draft_price: String,
    ids: IdGenerator,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously persisted list
    pub fn with_items(items: Vec<Item>) -> Self {
        let mut state = Self::default();
        state.replace_items(items);
        state
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_price(&self) -> &str {
        &self.draft_price
    }

    /// Swap in a loaded list. Not a user mutation, so nothing is persisted.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.ids.observe(&items);
        self.items = items;
    }

    /// Route an intent to its transition
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<Effect>, DomainError> {
        match intent {
            Intent::SetDraftName(text) => Ok(self.set_draft_name(text)),
            Intent::SetDraftPrice(text) => Ok(self.set_draft_price(text)),
            Intent::AddItem => {
                let name = self.draft_name.clone();
                let price_text = self.draft_price.clone();
                self.add_item(&name, &price_text)
            }
            Intent::TogglePurchased(id) => Ok(self.toggle_purchased(&id)),
            Intent::RemoveItem(id) => Ok(self.remove_item(&id)),
            Intent::ClearAll => Ok(self.clear_all()),
            Intent::SetSearchQuery(text) => Ok(self.set_search_query(text)),
            Intent::ToggleTheme => Ok(self.toggle_theme()),
        }
    }

    /// Validate and append a new item, then clear the drafts.
    /// On a validation error nothing changes.
    pub fn add_item(&mut self, name: &str, price_text: &str) -> Result<Vec<Effect>, DomainError> {
        let item = Item::create(&mut self.ids, name, price_text)?;
        self.items.push(item);
        self.draft_name.clear();
        self.draft_price.clear();
        Ok(self.persist())
    }

    /// Flip the purchased flag; unknown ids are ignored
    pub fn toggle_purchased(&mut self, id: &ItemId) -> Vec<Effect> {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.purchased = !item.purchased;
                self.persist()
            }
            None => Vec::new(),
        }
    }

    /// Remove an item; unknown ids are ignored
    pub fn remove_item(&mut self, id: &ItemId) -> Vec<Effect> {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before {
            return Vec::new();
        }
        self.persist()
    }

    pub fn clear_all(&mut self) -> Vec<Effect> {
        self.items.clear();
        self.persist()
    }

    pub fn set_search_query(&mut self, text: String) -> Vec<Effect> {
        self.search_query = text;
        Vec::new()
    }

    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        self.dark_mode = !self.dark_mode;
        Vec::new()
    }

    pub fn set_draft_name(&mut self, text: String) -> Vec<Effect> {
        self.draft_name = text;
        Vec::new()
    }

    pub fn set_draft_price(&mut self, text: String) -> Vec<Effect> {
        self.draft_price = text;
        Vec::new()
    }

    pub fn total_remaining(&self) -> f64 {
        total_remaining(&self.items)
    }

    pub fn filtered_items(&self) -> Vec<&Item> {
        filter_items(&self.items, &self.search_query)
    }

    pub fn view(&self) -> ListView {
        ListView {
            items: self.items.clone(),
            filtered_items: self.filtered_items().into_iter().cloned().collect(),
            total_remaining: self.total_remaining(),
            dark_mode: self.dark_mode,
            search_query: self.search_query.clone(),
            draft_name: self.draft_name.clone(),
            draft_price: self.draft_price.clone(),
        }
    }

    fn persist(&self) -> Vec<Effect> {
        vec![Effect::Persist(self.items.clone())]
    }
}
