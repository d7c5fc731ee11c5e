// src/services/inventory_service.rs
//
// Item collection store: owns the session's in-memory item list plus the
// loading/error status of the most recent full load. The hosted store owns
// the durable copy; after every successful mutation the in-memory list is
// reconciled from the gateway's returned row instead of re-fetching.

use std::sync::Arc;

use log::{error, info};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{validate_draft, FridgeItem, ItemDraft};
use crate::error::AppResult;
use crate::repositories::ItemRepository;

/// Status of the most recent full load.
///
/// Transitions: Idle -> Loading -> {Loaded | LoadFailed}; Loaded -> Loading
/// on explicit refetch. Mutations never transition this state; they splice
/// the Loaded snapshot directly and fail independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    LoadFailed { message: String },
}

struct Snapshot {
    items: Vec<FridgeItem>,
    state: LoadState,
}

// ============================================================================
// PURE SNAPSHOT TRANSITIONS
// ============================================================================
//
// Each mutation outcome is applied through one of these functions so the
// splice logic is testable in isolation.

/// A freshly created item is prepended, regardless of its created_at value.
/// No re-sort is performed.
pub fn apply_created(items: &mut Vec<FridgeItem>, item: FridgeItem) {
    items.insert(0, item);
}

/// The entry with the matching id is replaced in place, position preserved.
/// No-op when the id is not present locally.
pub fn apply_updated(items: &mut [FridgeItem], item: FridgeItem) {
    if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
        *existing = item;
    }
}

/// The entry with the matching id is removed. Removing an id that is
/// already gone leaves the list unaltered.
pub fn apply_deleted(items: &mut Vec<FridgeItem>, id: Uuid) {
    items.retain(|i| i.id != id);
}

pub struct InventoryService {
    item_repo: Arc<dyn ItemRepository>,
    snapshot: RwLock<Snapshot>,
}

impl InventoryService {
    pub fn new(item_repo: Arc<dyn ItemRepository>) -> Self {
        Self {
            item_repo,
            snapshot: RwLock::new(Snapshot {
                items: Vec::new(),
                state: LoadState::Idle,
            }),
        }
    }

    /// Replace the snapshot with a full fetch from the store, order
    /// preserved verbatim. On failure the previously loaded items stay in
    /// place and only the status changes.
    pub async fn load(&self) -> AppResult<Vec<FridgeItem>> {
        {
            let mut snapshot = self.snapshot.write().await;
            snapshot.state = LoadState::Loading;
        }

        match self.item_repo.list_all().await {
            Ok(items) => {
                let mut snapshot = self.snapshot.write().await;
                snapshot.items = items.clone();
                snapshot.state = LoadState::Loaded;
                info!("loaded {} items", items.len());
                Ok(items)
            }
            Err(e) => {
                error!("failed to load items: {}", e);
                let mut snapshot = self.snapshot.write().await;
                snapshot.state = LoadState::LoadFailed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Alias for `load`, exposed for explicit user-triggered refresh.
    pub async fn refetch(&self) -> AppResult<Vec<FridgeItem>> {
        self.load().await
    }

    pub async fn create(&self, draft: ItemDraft) -> AppResult<FridgeItem> {
        validate_draft(&draft)?;
        let item = self.item_repo.create(&draft).await?;
        info!("created item {} ('{}')", item.id, item.name);

        let mut snapshot = self.snapshot.write().await;
        apply_created(&mut snapshot.items, item.clone());
        Ok(item)
    }

    pub async fn update(&self, id: Uuid, draft: ItemDraft) -> AppResult<FridgeItem> {
        validate_draft(&draft)?;
        let item = self.item_repo.update(id, &draft).await?;
        info!("updated item {}", id);

        let mut snapshot = self.snapshot.write().await;
        apply_updated(&mut snapshot.items, item.clone());
        Ok(item)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.item_repo.delete(id).await?;
        info!("deleted item {}", id);

        let mut snapshot = self.snapshot.write().await;
        apply_deleted(&mut snapshot.items, id);
        Ok(())
    }

    /// Current snapshot, in the order the store (or subsequent splices)
    /// produced it.
    pub async fn items(&self) -> Vec<FridgeItem> {
        self.snapshot.read().await.items.clone()
    }

    pub async fn load_state(&self) -> LoadState {
        self.snapshot.read().await.state.clone()
    }

    pub async fn find(&self, id: Uuid) -> Option<FridgeItem> {
        self.snapshot
            .read()
            .await
            .items
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }
}
