// src/application/state.rs

use std::sync::Arc;

use crate::services::InventoryService;

/// Application state managed by Tauri.
/// Arc-wrapped for thread-safe sharing across commands.
/// Initialized in main.rs.
pub struct AppState {
    pub inventory_service: Arc<InventoryService>,
}
