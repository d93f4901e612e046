//! Shopping App Backend
//!
//! Hosts the single shopping screen. Owns the list manager,
//! picks the storage location and wires up logging.
//! - commands: Tauri command handlers over the list manager

use std::path::{Path, PathBuf};
use std::sync::Arc;

use shopping_core::{KeyValueStore, ListManager, ManagerConfig, MemoryStore, SqliteStore};
use tauri::Manager;
use tokio::sync::Mutex;

mod commands;

/// Application state shared across commands
pub struct AppState {
    pub manager: Mutex<ListManager>,
    pub db_path: PathBuf,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, String> {
    let app_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| format!("No app data dir: {}", e))?;
    std::fs::create_dir_all(&app_dir).map_err(|e| format!("Failed to create {}: {}", app_dir.display(), e))?;
    Ok(app_dir.join("shopping_list.db"))
}

/// Open the SQLite store, falling back to memory so the screen still works
async fn open_store(db_path: &Path) -> Arc<dyn KeyValueStore> {
    match SqliteStore::open(db_path).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to open {}: {}; list will not persist", db_path.display(), e);
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "ShoppingApp")?;

            let db_path = get_db_path(&app_handle)?;
            let config = ManagerConfig::default();
            log::info!(
                "Starting at {} with store {} (key '{}', debounce {:?})",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                db_path.display(),
                config.storage_key,
                config.save_debounce
            );

            // The save writer is spawned onto Tauri's runtime
            let manager = tauri::async_runtime::block_on(async {
                let store = open_store(&db_path).await;
                ListManager::new(store, config)
            });

            app.manage(AppState {
                manager: Mutex::new(manager),
                db_path,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::load_list,
            commands::add_item,
            commands::set_draft_name,
            commands::set_draft_price,
            commands::toggle_purchased,
            commands::remove_item,
            commands::clear_all,
            commands::set_search_query,
            commands::toggle_theme,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            // Don't lose a save still waiting out its debounce
            if let Some(state) = app_handle.try_state::<AppState>() {
                tauri::async_runtime::block_on(async {
                    state.manager.lock().await.flush().await;
                });
                let _ = rolling_logger::info(&format!("Saved list to {}", state.db_path.display()));
            }
        }
    });
}
