// src/application/commands/view_commands.rs
//
// View Command Handlers: summary counters, expiry notices, category
// options, and create/edit form preparation. All computed per call from
// the current unfiltered snapshot.

use chrono::Local;
use tauri::State;
use uuid::Uuid;

use crate::application::dto::{
    notices_to_dtos, ExpiryNoticeDto, InventorySummaryDto, ItemFormDto,
};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::application::view::{category_options, ExpiryNotices, InventorySummary, ItemForm};
use crate::error::AppError;

#[tauri::command]
pub async fn get_inventory_summary(
    state: State<'_, AppState>,
) -> Result<InventorySummaryDto, String> {
    let items = state.inventory_service.items().await;
    let today = Local::now().date_naive();
    Ok(InventorySummaryDto::from(InventorySummary::compute(
        &items, today,
    )))
}

/// The expired and expiring-soon banners; a banner with no items is
/// absent from the result.
#[tauri::command]
pub async fn get_expiry_notices(state: State<'_, AppState>) -> Result<Vec<ExpiryNoticeDto>, String> {
    let items = state.inventory_service.items().await;
    let today = Local::now().date_naive();
    Ok(notices_to_dtos(ExpiryNotices::compute(&items, today)))
}

/// Distinct non-empty categories for the filter dropdown.
#[tauri::command]
pub async fn list_categories(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    let items = state.inventory_service.items().await;
    Ok(category_options(&items))
}

/// Form state for the create/edit dialog: pre-populated from the target
/// item in edit mode, create-mode defaults otherwise.
#[tauri::command]
pub async fn prepare_item_form(
    item_id: Option<String>,
    state: State<'_, AppState>,
) -> Result<ItemFormDto, String> {
    let form = match item_id {
        Some(raw) => {
            let id = Uuid::parse_str(&raw)
                .map_err(|e| AppError::Other(format!("Invalid id: {}", e)))
                .to_error_response()?;
            let item = state
                .inventory_service
                .find(id)
                .await
                .ok_or(AppError::NotFound)
                .to_error_response()?;
            ItemForm::from_item(&item)
        }
        None => ItemForm::default_for(Local::now().date_naive()),
    };

    Ok(ItemFormDto::from(form))
}
