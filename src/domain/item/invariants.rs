use super::entity::ItemDraft;
use crate::domain::{DomainError, DomainResult};

/// Validates all ItemDraft invariants
/// These are the absolute rules that must hold before a draft reaches the store
pub fn validate_draft(draft: &ItemDraft) -> DomainResult<()> {
    validate_name(&draft.name)?;
    validate_quantity(draft.quantity)?;
    Ok(())
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }
    Ok(())
}

/// Quantity is a positive integer
fn validate_quantity(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity(quantity.to_string()));
    }
    Ok(())
}

/// Invariants that must hold true for the item domain:
///
/// 1. Identity (UUID) is assigned by the store and immutable
/// 2. Created timestamp never changes
/// 3. Name cannot be empty
/// 4. Quantity is always >= 1
/// 5. Category and location may be empty
/// 6. Expiry date is always a valid calendar date (guaranteed by the type)

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> ItemDraft {
        ItemDraft {
            name: "Milk".to_string(),
            quantity: 1,
            expiry_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            category: String::new(),
            location: String::new(),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate_draft(&draft()).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert!(validate_draft(&d).is_err());
    }

    #[test]
    fn test_zero_quantity_fails() {
        let mut d = draft();
        d.quantity = 0;
        assert!(validate_draft(&d).is_err());
    }
}
