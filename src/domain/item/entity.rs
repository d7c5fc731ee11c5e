use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// A single food record tracked for expiry.
/// The hosted store owns the durable copy; this is the application's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeItem {
    /// Assigned by the store on creation, never changes afterwards
    pub id: Uuid,

    /// Non-empty display name ("Milk", "Eggs", ...)
    pub name: String,

    /// Positive unit count
    pub quantity: u32,

    /// Calendar date, no time component
    pub expiry_date: NaiveDate,

    /// Free text, may be empty
    pub category: String,

    /// Free text, may be empty ("Shelf 1", "Door", ...)
    pub location: String,

    /// Assigned by the store on creation, immutable
    pub created_at: DateTime<Utc>,
}

/// The mutable subset of item fields supplied by the user for create and
/// update. `id` and `created_at` are never set by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
    pub expiry_date: NaiveDate,
    pub category: String,
    pub location: String,
}

impl ItemDraft {
    /// Build a draft from raw form input.
    ///
    /// Parsing is strict: a blank name, a non-numeric or non-positive
    /// quantity, or a malformed date fails with a DomainError instead of
    /// silently defaulting.
    pub fn parse(
        name: &str,
        quantity: &str,
        expiry_date: &str,
        category: &str,
        location: &str,
    ) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        let quantity: u32 = quantity
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidQuantity(quantity.to_string()))?;
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity.to_string()));
        }

        let expiry_date = NaiveDate::parse_from_str(expiry_date.trim(), "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(expiry_date.to_string()))?;

        Ok(Self {
            name: name.trim().to_string(),
            quantity,
            expiry_date,
            category: category.trim().to_string(),
            location: location.trim().to_string(),
        })
    }
}
