// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use anyhow::Context;

// Direct imports for the Tauri command handler macro
use fridgekeeper::application::commands::*;
use fridgekeeper::application::state::AppState;
use fridgekeeper::repositories::{HttpItemRepository, ItemRepository, StoreConfig};
use fridgekeeper::services::InventoryService;

fn main() -> anyhow::Result<()> {
    // 1. STORE GATEWAY
    let config = StoreConfig::from_env().context("reading store configuration")?;
    let item_repo: Arc<dyn ItemRepository> = Arc::new(HttpItemRepository::new(config)?);

    // 2. SERVICES
    let inventory_service = Arc::new(InventoryService::new(item_repo));

    // 3. APPLICATION STATE
    let app_state = AppState { inventory_service };

    // 4. TAURI BOOTSTRAP
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            list_items,
            refresh_items,
            create_item,
            update_item,
            delete_item,
            get_load_state,
            get_inventory_summary,
            get_expiry_notices,
            list_categories,
            prepare_item_form,
        ])
        .run(tauri::generate_context!())
        .context("running application")?;

    Ok(())
}
