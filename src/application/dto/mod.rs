// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Derived fields (freshness, days until expiry) are computed at
//   conversion time from the caller-supplied reference date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::view::{ExpiryNotices, InventorySummary, ItemForm};
use crate::domain::{days_until_expiry, FreshnessStatus, FridgeItem};
use crate::services::LoadState;

// ============================================================================
// ITEM DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FridgeItemDto {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub expiry_date: String,
    pub category: String,
    pub location: String,
    pub created_at: String,
    /// "expired" | "expiring-soon" | "fresh"
    pub freshness: String,
    /// Negative once the expiry date has passed
    pub days_until_expiry: i64,
}

impl FridgeItemDto {
    pub fn from_item(item: &FridgeItem, today: NaiveDate) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            expiry_date: item.expiry_date.format("%Y-%m-%d").to_string(),
            category: item.category.clone(),
            location: item.location.clone(),
            created_at: item.created_at.to_rfc3339(),
            freshness: FreshnessStatus::classify(item.expiry_date, today).to_string(),
            days_until_expiry: days_until_expiry(item.expiry_date, today),
        }
    }
}

/// Raw form fields exactly as typed; parsed into a validated draft on
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemFormDto {
    pub name: String,
    pub quantity: String,
    pub expiry_date: String,
    pub category: String,
    pub location: String,
}

impl From<ItemForm> for ItemFormDto {
    fn from(form: ItemForm) -> Self {
        Self {
            name: form.name,
            quantity: form.quantity,
            expiry_date: form.expiry_date,
            category: form.category,
            location: form.location,
        }
    }
}

impl From<ItemFormDto> for ItemForm {
    fn from(dto: ItemFormDto) -> Self {
        Self {
            name: dto.name,
            quantity: dto.quantity,
            expiry_date: dto.expiry_date,
            category: dto.category,
            location: dto.location,
        }
    }
}

// ============================================================================
// VIEW DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySummaryDto {
    pub total: usize,
    pub expired: usize,
    pub expiring_soon: usize,
    pub categories: usize,
}

impl From<InventorySummary> for InventorySummaryDto {
    fn from(summary: InventorySummary) -> Self {
        Self {
            total: summary.total,
            expired: summary.expired,
            expiring_soon: summary.expiring_soon,
            categories: summary.categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiryNoticeDto {
    /// "expired" | "expiring-soon"
    pub kind: String,
    pub count: usize,
    pub item_names: Vec<String>,
}

/// A banner with no items is suppressed: it simply does not appear in the
/// returned list.
pub fn notices_to_dtos(notices: ExpiryNotices) -> Vec<ExpiryNoticeDto> {
    let mut dtos = Vec::new();

    if !notices.expired.is_empty() {
        dtos.push(ExpiryNoticeDto {
            kind: FreshnessStatus::Expired.to_string(),
            count: notices.expired.len(),
            item_names: notices.expired,
        });
    }
    if !notices.expiring_soon.is_empty() {
        dtos.push(ExpiryNoticeDto {
            kind: FreshnessStatus::ExpiringSoon.to_string(),
            count: notices.expiring_soon.len(),
            item_names: notices.expiring_soon,
        });
    }

    dtos
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadStateDto {
    /// "idle" | "loading" | "loaded" | "load-failed"
    pub state: String,
    pub error: Option<String>,
}

impl From<LoadState> for LoadStateDto {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Idle => Self {
                state: "idle".to_string(),
                error: None,
            },
            LoadState::Loading => Self {
                state: "loading".to_string(),
                error: None,
            },
            LoadState::Loaded => Self {
                state: "loaded".to_string(),
                error: None,
            },
            LoadState::LoadFailed { message } => Self {
                state: "load-failed".to_string(),
                error: Some(message),
            },
        }
    }
}
