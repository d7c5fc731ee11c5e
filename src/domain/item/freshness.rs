use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Items expiring within this many days (inclusive) count as expiring-soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 3;

/// Derived freshness of an item. Never persisted; recomputed on demand
/// from the expiry date and the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessStatus {
    Expired,
    ExpiringSoon,
    Fresh,
}

/// Whole calendar days between today and the expiry date.
/// Negative once the expiry date has passed.
pub fn days_until_expiry(expiry_date: NaiveDate, today: NaiveDate) -> i64 {
    (expiry_date - today).num_days()
}

impl FreshnessStatus {
    /// Total classification into exactly one of the three statuses.
    /// The expiring-soon window is closed on both ends: 0 and 3 days
    /// both count as expiring-soon.
    pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        let days = days_until_expiry(expiry_date, today);
        if days < 0 {
            FreshnessStatus::Expired
        } else if days <= EXPIRING_SOON_WINDOW_DAYS {
            FreshnessStatus::ExpiringSoon
        } else {
            FreshnessStatus::Fresh
        }
    }
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreshnessStatus::Expired => write!(f, "expired"),
            FreshnessStatus::ExpiringSoon => write!(f, "expiring-soon"),
            FreshnessStatus::Fresh => write!(f, "fresh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_expiry_today_is_expiring_soon() {
        assert_eq!(
            FreshnessStatus::classify(today(), today()),
            FreshnessStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_expiry_at_window_end_is_expiring_soon() {
        let expiry = today().checked_add_days(Days::new(3)).unwrap();
        assert_eq!(
            FreshnessStatus::classify(expiry, today()),
            FreshnessStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_expiry_past_window_is_fresh() {
        let expiry = today().checked_add_days(Days::new(4)).unwrap();
        assert_eq!(
            FreshnessStatus::classify(expiry, today()),
            FreshnessStatus::Fresh
        );
    }

    #[test]
    fn test_expiry_yesterday_is_expired() {
        let expiry = today().checked_sub_days(Days::new(1)).unwrap();
        assert_eq!(
            FreshnessStatus::classify(expiry, today()),
            FreshnessStatus::Expired
        );
    }

    #[test]
    fn test_days_until_expiry_sign() {
        let past = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let future = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        assert_eq!(days_until_expiry(past, today()), -5);
        assert_eq!(days_until_expiry(future, today()), 2);
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(FreshnessStatus::Expired.to_string(), "expired");
        assert_eq!(FreshnessStatus::ExpiringSoon.to_string(), "expiring-soon");
        assert_eq!(FreshnessStatus::Fresh.to_string(), "fresh");
    }
}
