//! Typed numeric identifier wrappers for the append-only collections.
//!
//! Records in the order, arrival, ledger, withdrawal, and history
//! collections carry sequence-style identifiers assigned as one greater
//! than the current maximum in the collection (or 1 when empty). Each
//! collection gets its own newtype so identifiers cannot be mixed at
//! compile time.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// The identifier assigned to the first record of an empty collection.
            pub const FIRST: Self = Self(1);

            /// Wrap a raw identifier value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the inner numeric value.
            pub const fn value(self) -> u64 {
                self.0
            }

            /// Return the identifier following this one, saturating at `u64::MAX`.
            pub const fn next(self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a purchase order.
    OrderId
}

define_id! {
    /// Unique identifier for a confirmed-arrival record.
    ArrivalId
}

define_id! {
    /// Unique identifier for a stock ledger row.
    StockRowId
}

define_id! {
    /// Unique identifier for a withdrawal record.
    WithdrawalId
}

define_id! {
    /// Unique identifier for a history entry.
    HistoryId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_is_one() {
        assert_eq!(OrderId::FIRST.value(), 1);
        assert_eq!(WithdrawalId::FIRST.value(), 1);
    }

    #[test]
    fn next_increments() {
        assert_eq!(OrderId::new(7).next(), OrderId::new(8));
    }

    #[test]
    fn next_saturates_at_max() {
        assert_eq!(HistoryId::new(u64::MAX).next(), HistoryId::new(u64::MAX));
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = ArrivalId::new(42);
        let json = serde_json::to_string(&original).ok();
        assert_eq!(json.as_deref(), Some("42"));
        let restored: Result<ArrivalId, _> = serde_json::from_str("42");
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn id_display_is_plain_number() {
        assert_eq!(StockRowId::new(3).to_string(), "3");
    }
}
