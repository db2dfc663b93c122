//! Enumeration types shared across the Gudang collections.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a stock item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// The item is active and may be ordered or withdrawn.
    Active,
    /// The item is retired and kept only for historical records.
    Inactive,
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// Delivery status of an arrival record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalStatus {
    /// The delivery has been confirmed against an order but not yet booked in.
    Confirmed,
    /// The delivery has been received and stock incremented.
    Received,
}

impl core::fmt::Display for ArrivalStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Received => write!(f, "received"),
        }
    }
}

/// Severity class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Informational (e.g. a new order was placed).
    Info,
    /// Warning (e.g. stock was withdrawn).
    Warning,
    /// Success (e.g. a delivery arrived).
    Success,
}

impl core::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Success => write!(f, "success"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Active).ok().as_deref(),
            Some("\"active\"")
        );
        assert_eq!(
            serde_json::to_string(&ArrivalStatus::Received)
                .ok()
                .as_deref(),
            Some("\"received\"")
        );
        assert_eq!(
            serde_json::to_string(&NotificationKind::Warning)
                .ok()
                .as_deref(),
            Some("\"warning\"")
        );
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(ItemStatus::Inactive.to_string(), "inactive");
        assert_eq!(ArrivalStatus::Confirmed.to_string(), "confirmed");
        assert_eq!(NotificationKind::Success.to_string(), "success");
    }
}
