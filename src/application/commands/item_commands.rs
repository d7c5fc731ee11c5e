// src/application/commands/item_commands.rs
//
// Item Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use chrono::Local;
use tauri::State;
use uuid::Uuid;

use crate::application::dto::{FridgeItemDto, ItemFormDto, LoadStateDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::application::view::{filter_items, CategoryFilter, ItemForm};
use crate::error::AppError;

/// Current snapshot with client-side search and category filter applied.
/// `category` of None or "all" disables the filter.
#[tauri::command]
pub async fn list_items(
    search: Option<String>,
    category: Option<String>,
    state: State<'_, AppState>,
) -> Result<Vec<FridgeItemDto>, String> {
    let items = state.inventory_service.items().await;
    let filter = CategoryFilter::from_selection(category);
    let query = search.unwrap_or_default();
    let today = Local::now().date_naive();

    Ok(filter_items(&items, &query, &filter)
        .into_iter()
        .map(|item| FridgeItemDto::from_item(item, today))
        .collect())
}

/// Full refetch from the store, replacing the snapshot.
#[tauri::command]
pub async fn refresh_items(state: State<'_, AppState>) -> Result<Vec<FridgeItemDto>, String> {
    let items = state.inventory_service.refetch().await.to_error_response()?;
    let today = Local::now().date_naive();

    Ok(items
        .iter()
        .map(|item| FridgeItemDto::from_item(item, today))
        .collect())
}

#[tauri::command]
pub async fn create_item(
    form: ItemFormDto,
    state: State<'_, AppState>,
) -> Result<FridgeItemDto, String> {
    let draft = ItemForm::from(form)
        .parse()
        .map_err(AppError::Domain)
        .to_error_response()?;

    let item = state.inventory_service.create(draft).await.to_error_response()?;
    Ok(FridgeItemDto::from_item(&item, Local::now().date_naive()))
}

#[tauri::command]
pub async fn update_item(
    item_id: String,
    form: ItemFormDto,
    state: State<'_, AppState>,
) -> Result<FridgeItemDto, String> {
    let id = parse_id(&item_id)?;
    let draft = ItemForm::from(form)
        .parse()
        .map_err(AppError::Domain)
        .to_error_response()?;

    let item = state
        .inventory_service
        .update(id, draft)
        .await
        .to_error_response()?;
    Ok(FridgeItemDto::from_item(&item, Local::now().date_naive()))
}

#[tauri::command]
pub async fn delete_item(item_id: String, state: State<'_, AppState>) -> Result<(), String> {
    let id = parse_id(&item_id)?;
    state.inventory_service.delete(id).await.to_error_response()
}

/// Loading/error status of the most recent full load.
#[tauri::command]
pub async fn get_load_state(state: State<'_, AppState>) -> Result<LoadStateDto, String> {
    Ok(LoadStateDto::from(state.inventory_service.load_state().await))
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw).map_err(|e| {
        let response = ErrorResponse::from_app_error(AppError::Other(format!("Invalid id: {}", e)));
        serde_json::to_string(&response).unwrap_or_else(|_| "Internal error".to_string())
    })
}
