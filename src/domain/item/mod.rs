// src/domain/item/mod.rs

pub mod entity;
pub mod freshness;
pub mod invariants;

pub use entity::{FridgeItem, ItemDraft};
pub use freshness::{days_until_expiry, FreshnessStatus, EXPIRING_SOON_WINDOW_DAYS};
pub use invariants::validate_draft;
