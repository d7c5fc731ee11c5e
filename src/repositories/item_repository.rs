// src/repositories/item_repository.rs
//
// Item persistence - sole boundary between the application's item shape
// and the hosted store's row shape (snake_case, plus an update timestamp
// the application never reads).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use reqwest::{header, Client, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{FridgeItem, ItemDraft};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, newest-created first.
    async fn list_all(&self) -> AppResult<Vec<FridgeItem>>;

    /// Insert a draft; the store assigns id and created_at.
    async fn create(&self, draft: &ItemDraft) -> AppResult<FridgeItem>;

    /// Full-row write of every mutable field. Fails if the id does not exist.
    async fn update(&self, id: Uuid, draft: &ItemDraft) -> AppResult<FridgeItem>;

    /// Deleting an id the store no longer has is treated as success.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Endpoint and credentials for the hosted store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    pub fn from_env() -> AppResult<Self> {
        let base_url = std::env::var("FRIDGE_STORE_URL")
            .map_err(|_| AppError::Configuration("FRIDGE_STORE_URL is not set".to_string()))?;
        let api_key = std::env::var("FRIDGE_STORE_KEY")
            .map_err(|_| AppError::Configuration("FRIDGE_STORE_KEY is not set".to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

/// Row shape at the store boundary.
#[derive(Debug, Deserialize)]
struct ItemRow {
    id: Uuid,
    name: String,
    quantity: u32,
    expiry_date: NaiveDate,
    category: String,
    location: String,
    created_at: DateTime<Utc>,
    /// Maintained by the store; the application never reads it.
    #[serde(default)]
    #[allow(dead_code)]
    updated_at: Option<DateTime<Utc>>,
}

/// Write shape: only the mutable fields, snake_case.
#[derive(Debug, Serialize)]
struct DraftRow<'a> {
    name: &'a str,
    quantity: u32,
    expiry_date: NaiveDate,
    category: &'a str,
    location: &'a str,
}

fn row_to_item(row: ItemRow) -> FridgeItem {
    FridgeItem {
        id: row.id,
        name: row.name,
        quantity: row.quantity,
        expiry_date: row.expiry_date,
        category: row.category,
        location: row.location,
        created_at: row.created_at,
    }
}

fn draft_to_row(draft: &ItemDraft) -> DraftRow<'_> {
    DraftRow {
        name: &draft.name,
        quantity: draft.quantity,
        expiry_date: draft.expiry_date,
        category: &draft.category,
        location: &draft.location,
    }
}

/// Error body shape returned by the store on failed requests.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

pub struct HttpItemRepository {
    base_url: String,
    http_client: Client,
}

impl HttpItemRepository {
    pub fn new(config: StoreConfig) -> AppResult<Self> {
        let mut headers = header::HeaderMap::new();
        let key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| AppError::Configuration("store API key is not a valid header".to_string()))?;
        let bearer = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| AppError::Configuration("store API key is not a valid header".to_string()))?;
        headers.insert("apikey", key);
        headers.insert(header::AUTHORIZATION, bearer);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url,
            http_client,
        })
    }

    fn items_url(&self) -> String {
        format!("{}/rest/v1/fridge_items", self.base_url)
    }

    /// Extract the store's error message, passed through verbatim.
    async fn store_error(action: &str, response: Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<StoreErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("store returned status {}", status));

        AppError::Persistence(format!("Failed to {}: {}", action, message))
    }
}

#[async_trait]
impl ItemRepository for HttpItemRepository {
    async fn list_all(&self) -> AppResult<Vec<FridgeItem>> {
        debug!("fetching all items from store");

        let response = self
            .http_client
            .get(self.items_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to fetch items: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::store_error("fetch items", response).await);
        }

        let rows: Vec<ItemRow> = response
            .json()
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to fetch items: {}", e)))?;

        Ok(rows.into_iter().map(row_to_item).collect())
    }

    async fn create(&self, draft: &ItemDraft) -> AppResult<FridgeItem> {
        debug!("creating item '{}'", draft.name);

        let response = self
            .http_client
            .post(self.items_url())
            .header("Prefer", "return=representation")
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(&draft_to_row(draft))
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to create item: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::store_error("create item", response).await);
        }

        let row: ItemRow = response
            .json()
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to create item: {}", e)))?;

        Ok(row_to_item(row))
    }

    async fn update(&self, id: Uuid, draft: &ItemDraft) -> AppResult<FridgeItem> {
        debug!("updating item {}", id);

        let response = self
            .http_client
            .patch(self.items_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .header(header::ACCEPT, "application/vnd.pgrst.object+json")
            .json(&draft_to_row(draft))
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to update item: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::store_error("update item", response).await);
        }

        let row: ItemRow = response
            .json()
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to update item: {}", e)))?;

        Ok(row_to_item(row))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        debug!("deleting item {}", id);

        let response = self
            .http_client
            .delete(self.items_url())
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await
            .map_err(|e| AppError::Persistence(format!("Failed to delete item: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::store_error("delete item", response).await);
        }

        Ok(())
    }
}
