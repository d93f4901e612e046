//! Tauri Commands for the Shopping List
//!
//! One command per user intent. Every command returns the updated view.

use tauri::State;
use shopping_core::{ItemId, ListView};
use crate::AppState;

/// Load the persisted list (first call only) and return the view
#[tauri::command]
pub async fn load_list(state: State<'_, AppState>) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    Ok(manager.load().await)
}

/// Validate and add a new item
#[tauri::command]
pub async fn add_item(
    state: State<'_, AppState>,
    name: String,
    price_text: String,
) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    manager.add_item(&name, &price_text).map_err(|e| {
        if !e.is_validation() {
            log::error!("add_item failed: {}", e);
        }
        e.to_string()
    })
}

#[tauri::command]
pub async fn set_draft_name(state: State<'_, AppState>, text: String) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    manager.set_draft_name(text).map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_draft_price(state: State<'_, AppState>, text: String) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    manager.set_draft_price(text).map_err(|e| e.to_string())
}

/// Toggle item purchased status
#[tauri::command]
pub async fn toggle_purchased(state: State<'_, AppState>, id: String) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    manager.toggle_purchased(ItemId::from(id)).map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_item(state: State<'_, AppState>, id: String) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    manager.remove_item(ItemId::from(id)).map_err(|e| e.to_string())
}

/// Remove every item
#[tauri::command]
pub async fn clear_all(state: State<'_, AppState>) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    log::info!("Clearing {} items", manager.items().len());
    manager.clear_all().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_search_query(state: State<'_, AppState>, query: String) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    manager.set_search_query(query).map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn toggle_theme(state: State<'_, AppState>) -> Result<ListView, String> {
    let mut manager = state.manager.lock().await;
    manager.toggle_theme().map_err(|e| e.to_string())
}
