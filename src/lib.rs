// src/lib.rs
// FridgeKeeper - Shared-fridge inventory tracker with expiry warnings
//
// Architecture:
// - Domain-centric: entity, freshness classification, and draft
//   validation live in the domain layer
// - Repositories: dumb mappers between the application item shape and the
//   hosted store's row shape; one network round trip per operation
// - Services: the session's in-memory item collection store
// - Application Layer: UI boundary (DTOs, view logic, Tauri commands)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    days_until_expiry, validate_draft, DomainError, DomainResult, FreshnessStatus, FridgeItem,
    ItemDraft, EXPIRING_SOON_WINDOW_DAYS,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{HttpItemRepository, ItemRepository, StoreConfig};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{InventoryService, LoadState};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
