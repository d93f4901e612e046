//! Manager Integration Tests
//!
//! Load/save behavior of the list manager against real stores.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{ListManager, ManagerConfig, SaveWriter, DEFAULT_STORAGE_KEY};
use crate::domain::{DomainError, DomainResult, Intent, ItemId, ValidationError};
use crate::repository::{decode_items, encode_items, KeyValueStore, MemoryStore, SqliteStore};

/// Store whose writes always fail
struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> DomainResult<Option<String>> {
        Err(DomainError::Storage("disk unavailable".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> DomainResult<()> {
        Err(DomainError::Storage("disk unavailable".to_string()))
    }
}

fn test_config() -> ManagerConfig {
    ManagerConfig::default().with_debounce(Duration::ZERO)
}

async fn stored_names(store: &dyn KeyValueStore) -> Vec<String> {
    let data = store.get(DEFAULT_STORAGE_KEY).await.unwrap().expect("nothing stored");
    decode_items(&data).unwrap().into_iter().map(|item| item.name).collect()
}

#[tokio::test]
async fn test_load_without_saved_data_keeps_empty_list() {
    let store = Arc::new(MemoryStore::new());
    let mut manager = ListManager::new(store, test_config());

    let view = manager.load().await;

    assert!(view.items.is_empty());
    assert!(manager.is_loaded());
}

#[tokio::test]
async fn test_load_hydrates_saved_list() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"1","name":"Rice","price":50,"purchased":false},{"id":"2","name":"Fish","price":30,"purchased":true}]"#,
        )
        .await
        .unwrap();

    let mut manager = ListManager::new(store, test_config());
    let view = manager.load().await;

    assert_eq!(view.items.len(), 2);
    assert_eq!(view.total_remaining, 50.0);
}

#[tokio::test]
async fn test_load_corrupt_data_leaves_list_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(DEFAULT_STORAGE_KEY, "{broken").await.unwrap();

    let mut manager = ListManager::new(store, test_config());
    let view = manager.load().await;

    assert!(view.items.is_empty());
}

#[tokio::test]
async fn test_load_read_failure_leaves_list_empty() {
    let mut manager = ListManager::new(Arc::new(FailingStore), test_config());
    let view = manager.load().await;
    assert!(view.items.is_empty());
}

#[tokio::test]
async fn test_second_load_is_noop() {
    let store = Arc::new(MemoryStore::new());
    let mut manager = ListManager::new(store.clone(), test_config());
    manager.load().await;
    manager.add_item("Milk", "20").unwrap();

    // Storage changed behind our back; a second load must not re-read it
    store.set(DEFAULT_STORAGE_KEY, "[]").await.unwrap();
    let view = manager.load().await;

    assert_eq!(view.items.len(), 1);
}

#[tokio::test]
async fn test_every_mutation_is_saved() {
    let store = Arc::new(MemoryStore::new());
    let mut manager = ListManager::new(store.clone(), test_config());
    manager.load().await;

    manager.add_item("Milk", "20").unwrap();
    manager.add_item("Bread", "35").unwrap();
    manager.flush().await;
    assert_eq!(stored_names(store.as_ref()).await, vec!["Milk", "Bread"]);

    let milk = manager.items()[0].id.clone();
    manager.toggle_purchased(milk.clone()).unwrap();
    manager.flush().await;
    let data = store.get(DEFAULT_STORAGE_KEY).await.unwrap().unwrap();
    assert!(decode_items(&data).unwrap()[0].purchased);

    manager.remove_item(milk).unwrap();
    manager.flush().await;
    assert_eq!(stored_names(store.as_ref()).await, vec!["Bread"]);
}

#[tokio::test]
async fn test_validation_error_is_returned_and_nothing_saved() {
    let store = Arc::new(MemoryStore::new());
    let mut manager = ListManager::new(store.clone(), test_config());
    manager.load().await;

    let err = manager.add_item("   ", "10").unwrap_err();
    assert_eq!(err, DomainError::Validation(ValidationError::EmptyName));
    let err = manager.add_item("Milk", "abc").unwrap_err();
    assert!(err.is_validation());

    manager.flush().await;
    assert!(manager.items().is_empty());
    assert!(store.get(DEFAULT_STORAGE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_dispatch_add_from_drafts() {
    let mut manager = ListManager::new(Arc::new(MemoryStore::new()), test_config());
    manager.load().await;

    manager.set_draft_name("Eggs".to_string()).unwrap();
    manager.set_draft_price("12.5".to_string()).unwrap();
    let view = manager.dispatch(Intent::AddItem).unwrap();

    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].price, 12.5);
    assert_eq!(view.draft_name, "");
    assert_eq!(view.draft_price, "");
}

#[tokio::test]
async fn test_clear_all_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shopping_list.db");

    let store = Arc::new(SqliteStore::open(&path).await.unwrap());
    let mut manager = ListManager::new(store, test_config());
    manager.load().await;
    manager.add_item("Milk", "20").unwrap();
    manager.add_item("Bread", "35").unwrap();
    manager.clear_all().unwrap();
    manager.shutdown().await;

    let reopened = Arc::new(SqliteStore::open(&path).await.unwrap());
    let mut restarted = ListManager::new(reopened, test_config());
    let view = restarted.load().await;

    assert!(view.items.is_empty());
}

#[tokio::test]
async fn test_list_survives_restart() {
    let store = Arc::new(MemoryStore::new());
    let mut manager = ListManager::new(store.clone(), test_config());
    manager.load().await;
    manager.add_item("Milk", "20").unwrap();
    manager.add_item("Bread", "35").unwrap();
    let before = manager.items().to_vec();
    manager.shutdown().await;

    let mut restarted = ListManager::new(store, test_config());
    restarted.load().await;
    assert_eq!(restarted.items(), before.as_slice());

    // Ids keep advancing past the loaded ones
    let view = restarted.add_item("Eggs", "5").unwrap();
    assert!(before.iter().all(|item| item.id != view.items[2].id));
}

#[tokio::test]
async fn test_ui_intents_do_not_touch_storage() {
    let store = Arc::new(MemoryStore::new());
    let mut manager = ListManager::new(store.clone(), test_config());
    manager.load().await;

    manager.set_search_query("milk".to_string()).unwrap();
    manager.toggle_theme().unwrap();
    manager.toggle_purchased(ItemId::new("missing")).unwrap();
    let stats = manager.shutdown().await;

    assert_eq!(stats.writes, 0);
    assert!(store.get(DEFAULT_STORAGE_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_failure_keeps_memory_state() {
    let mut manager = ListManager::new(Arc::new(FailingStore), test_config());
    manager.load().await;

    let view = manager.add_item("Milk", "20").unwrap();
    manager.flush().await;

    assert_eq!(view.items.len(), 1);
    assert_eq!(manager.items().len(), 1);

    let stats = manager.shutdown().await;
    assert_eq!(stats.writes, 0);
    assert_eq!(stats.failures, 1);
}

#[tokio::test]
async fn test_rapid_mutations_are_coalesced() {
    let store = Arc::new(MemoryStore::new());
    let config = ManagerConfig::default().with_debounce(Duration::from_millis(50));
    let mut manager = ListManager::new(store.clone(), config);
    manager.load().await;

    manager.add_item("Milk", "20").unwrap();
    let id = manager.items()[0].id.clone();
    for _ in 0..99 {
        manager.toggle_purchased(id.clone()).unwrap();
    }
    let expected = manager.items().to_vec();
    let stats = manager.shutdown().await;

    assert!(stats.writes < 100, "{} writes", stats.writes);
    assert!(stats.superseded > 0);
    let data = store.get(DEFAULT_STORAGE_KEY).await.unwrap().unwrap();
    assert_eq!(decode_items(&data).unwrap(), expected);
}

#[tokio::test]
async fn test_writer_saves_latest_snapshot_only() {
    let store = Arc::new(MemoryStore::new());
    let mut writer = SaveWriter::spawn(store.clone(), "list", Duration::from_millis(20));

    let mut manager_state = crate::domain::ListState::new();
    manager_state.add_item("Old", "1").unwrap();
    writer.submit(manager_state.items().to_vec());
    manager_state.clear_all();
    writer.submit(manager_state.items().to_vec());
    assert_eq!(writer.generation(), 2);

    writer.flush().await;
    assert_eq!(store.get("list").await.unwrap().as_deref(), Some(encode_items(&[]).unwrap().as_str()));

    let stats = writer.shutdown().await;
    assert_eq!(stats.writes, 1);
    assert_eq!(stats.superseded, 1);
}

#[tokio::test]
async fn test_flush_without_submissions_returns() {
    let writer = SaveWriter::spawn(Arc::new(MemoryStore::new()), "list", Duration::ZERO);
    writer.flush().await;
    assert_eq!(writer.shutdown().await.writes, 0);
}

#[tokio::test]
async fn test_changes_before_load_are_ignored() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(DEFAULT_STORAGE_KEY, r#"[{"id":"1","name":"Rice","price":50,"purchased":false}]"#)
        .await
        .unwrap();
    let mut manager = ListManager::new(store.clone(), test_config());

    let view = manager.add_item("Milk", "20").unwrap();
    assert!(view.items.is_empty());
    manager.clear_all().unwrap();
    manager.toggle_theme().unwrap();

    let view = manager.load().await;
    manager.flush().await;

    assert_eq!(view.items.len(), 1);
    assert!(view.dark_mode);
    assert_eq!(stored_names(store.as_ref()).await, vec!["Rice"]);
    assert_eq!(manager.shutdown().await.writes, 0);
}

#[tokio::test]
async fn test_add_after_loading_largest_id() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"9223372036854775807","name":"Rice","price":50,"purchased":false}]"#,
        )
        .await
        .unwrap();
    let mut manager = ListManager::new(store.clone(), test_config());
    manager.load().await;

    let view = manager.add_item("Milk", "20").unwrap();
    manager.flush().await;

    assert_eq!(view.items.len(), 2);
    assert_ne!(view.items[0].id, view.items[1].id);
    assert_eq!(stored_names(store.as_ref()).await, vec!["Rice", "Milk"]);
}
