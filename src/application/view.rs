// src/application/view.rs
//
// Presentation logic over the current snapshot: search/filter, category
// options, summary counters, expiry notices, and the create/edit form
// state. Everything here is pure and recomputed per call; nothing is
// persisted.

use chrono::NaiveDate;

use crate::domain::{DomainResult, FreshnessStatus, FridgeItem, ItemDraft};

// ============================================================================
// SEARCH & FILTER
// ============================================================================

/// Category filter selection. `All` disables the filter; otherwise the
/// item's category must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// UI sends `None`, an empty string, or the sentinel "all" for the
    /// unfiltered view.
    pub fn from_selection(raw: Option<String>) -> Self {
        match raw {
            None => CategoryFilter::All,
            Some(s) if s.is_empty() || s == "all" => CategoryFilter::All,
            Some(s) => CategoryFilter::Category(s),
        }
    }

    fn matches(&self, item: &FridgeItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => item.category == *category,
        }
    }
}

/// Case-insensitive substring search against name, category, or location
/// (OR across the three fields), combined (AND) with the category filter.
pub fn filter_items<'a>(
    items: &'a [FridgeItem],
    query: &str,
    filter: &CategoryFilter,
) -> Vec<&'a FridgeItem> {
    let query = query.to_lowercase();

    items
        .iter()
        .filter(|item| {
            let matches_search = item.name.to_lowercase().contains(&query)
                || item.category.to_lowercase().contains(&query)
                || item.location.to_lowercase().contains(&query);
            matches_search && filter.matches(item)
        })
        .collect()
}

/// Distinct non-empty categories in the snapshot, in the order first
/// encountered.
pub fn category_options(items: &[FridgeItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

// ============================================================================
// SUMMARY COUNTERS
// ============================================================================

/// Per-render counters over the unfiltered snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub total: usize,
    pub expired: usize,
    pub expiring_soon: usize,
    pub categories: usize,
}

impl InventorySummary {
    pub fn compute(items: &[FridgeItem], today: NaiveDate) -> Self {
        let expired = items
            .iter()
            .filter(|i| FreshnessStatus::classify(i.expiry_date, today) == FreshnessStatus::Expired)
            .count();
        let expiring_soon = items
            .iter()
            .filter(|i| {
                FreshnessStatus::classify(i.expiry_date, today) == FreshnessStatus::ExpiringSoon
            })
            .count();

        Self {
            total: items.len(),
            expired,
            expiring_soon,
            categories: category_options(items).len(),
        }
    }
}

// ============================================================================
// EXPIRY NOTICES
// ============================================================================

/// The two unconditional notice banners: all expired items by name, and
/// all items expiring within the warning window. A banner with no items
/// is suppressed entirely at the DTO boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryNotices {
    pub expired: Vec<String>,
    pub expiring_soon: Vec<String>,
}

impl ExpiryNotices {
    pub fn compute(items: &[FridgeItem], today: NaiveDate) -> Self {
        let mut expired = Vec::new();
        let mut expiring_soon = Vec::new();

        for item in items {
            match FreshnessStatus::classify(item.expiry_date, today) {
                FreshnessStatus::Expired => expired.push(item.name.clone()),
                FreshnessStatus::ExpiringSoon => expiring_soon.push(item.name.clone()),
                FreshnessStatus::Fresh => {}
            }
        }

        Self {
            expired,
            expiring_soon,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expired.is_empty() && self.expiring_soon.is_empty()
    }
}

// ============================================================================
// CREATE/EDIT FORM STATE
// ============================================================================

/// Raw string form state, shared by create and edit modes. Parsing into a
/// validated draft happens only on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub expiry_date: String,
    pub category: String,
    pub location: String,
}

impl ItemForm {
    /// Create-mode defaults: quantity 1, today's date, empty text fields.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            quantity: "1".to_string(),
            expiry_date: today.format("%Y-%m-%d").to_string(),
            category: String::new(),
            location: String::new(),
        }
    }

    /// Edit-mode pre-population from the item being edited.
    pub fn from_item(item: &FridgeItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            expiry_date: item.expiry_date.format("%Y-%m-%d").to_string(),
            category: item.category.clone(),
            location: item.location.clone(),
        }
    }

    /// Strict parse into a draft; fails with a DomainError instead of
    /// silently defaulting any field.
    pub fn parse(&self) -> DomainResult<ItemDraft> {
        ItemDraft::parse(
            &self.name,
            &self.quantity,
            &self.expiry_date,
            &self.category,
            &self.location,
        )
    }

    /// After a successful create-mode submission the form returns to its
    /// defaults.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::default_for(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn item(name: &str, category: &str, location: &str, expiry: NaiveDate) -> FridgeItem {
        FridgeItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity: 1,
            expiry_date: expiry,
            category: category.to_string(),
            location: location.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn far() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_search_matches_any_of_the_three_fields() {
        let items = vec![
            item("Milk", "Dairy", "Shelf1", far()),
            item("Egg", "Dairy", "Shelf2", far()),
        ];

        let found = filter_items(&items, "dairy", &CategoryFilter::All);
        assert_eq!(found.len(), 2);

        let found = filter_items(&items, "shelf2", &CategoryFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Egg");
    }

    #[test]
    fn test_search_combines_with_category_filter() {
        let items = vec![
            item("Milk", "Dairy", "Shelf1", far()),
            item("Egg", "Dairy", "Shelf2", far()),
        ];

        let dairy = CategoryFilter::Category("Dairy".to_string());
        let found = filter_items(&items, "egg", &dairy);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Egg");

        let produce = CategoryFilter::Category("Produce".to_string());
        assert!(filter_items(&items, "", &produce).is_empty());
    }

    #[test]
    fn test_filter_from_selection_sentinels() {
        assert_eq!(CategoryFilter::from_selection(None), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection(Some("all".to_string())),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::from_selection(Some("Dairy".to_string())),
            CategoryFilter::Category("Dairy".to_string())
        );
    }

    #[test]
    fn test_category_options_are_distinct_in_first_encounter_order() {
        let items = vec![
            item("Milk", "Dairy", "", far()),
            item("Apple", "Produce", "", far()),
            item("Egg", "Dairy", "", far()),
            item("Soda", "", "", far()),
        ];

        assert_eq!(category_options(&items), vec!["Dairy", "Produce"]);
    }

    #[test]
    fn test_summary_counts_over_unfiltered_snapshot() {
        let items = vec![
            item("A", "Dairy", "", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
            item("B", "Produce", "", NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()),
            item("C", "Dairy", "", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        ];

        let summary = InventorySummary::compute(&items, today());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.expiring_soon, 1);
        assert_eq!(summary.categories, 2);
    }

    #[test]
    fn test_notices_list_names_per_status() {
        let items = vec![
            item("A", "", "", NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
            item("B", "", "", NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()),
            item("C", "", "", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        ];

        let notices = ExpiryNotices::compute(&items, today());
        assert_eq!(notices.expired, vec!["A"]);
        assert_eq!(notices.expiring_soon, vec!["B"]);
    }

    #[test]
    fn test_notices_empty_when_everything_is_fresh() {
        let items = vec![item("C", "", "", far())];
        let notices = ExpiryNotices::compute(&items, today());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_form_defaults_and_reset() {
        let mut form = ItemForm::default_for(today());
        assert_eq!(form.quantity, "1");
        assert_eq!(form.expiry_date, "2024-01-10");
        assert!(form.name.is_empty());

        form.name = "Milk".to_string();
        form.quantity = "3".to_string();
        form.reset(today());
        assert_eq!(form, ItemForm::default_for(today()));
    }

    #[test]
    fn test_form_prepopulates_from_item_and_parses_back() {
        let source = item("Milk", "Dairy", "Shelf 1", far());
        let form = ItemForm::from_item(&source);
        assert_eq!(form.name, "Milk");
        assert_eq!(form.quantity, "1");
        assert_eq!(form.expiry_date, "2024-02-01");

        let draft = form.parse().unwrap();
        assert_eq!(draft.name, source.name);
        assert_eq!(draft.quantity, source.quantity);
        assert_eq!(draft.expiry_date, source.expiry_date);
        assert_eq!(draft.category, source.category);
        assert_eq!(draft.location, source.location);
    }

    #[test]
    fn test_form_parse_rejects_bad_quantity() {
        let mut form = ItemForm::default_for(today());
        form.name = "Milk".to_string();
        form.quantity = "lots".to_string();
        assert!(form.parse().is_err());
    }
}
