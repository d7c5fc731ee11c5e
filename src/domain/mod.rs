// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod item;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use item::{
    days_until_expiry, validate_draft, FreshnessStatus, FridgeItem, ItemDraft,
    EXPIRING_SOON_WINDOW_DAYS,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("Quantity must be a positive integer, got '{0}'")]
    InvalidQuantity(String),

    #[error("Invalid expiry date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
