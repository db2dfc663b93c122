//! The fixed set of collection storage keys.
//!
//! Every collection persists under exactly one key. The key doubles as
//! the file stem used by the JSON file adapter and as the path segment
//! accepted by the export endpoints.

use serde::{Deserialize, Serialize};

/// Identifies one of the seven persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKey {
    /// Current stock items.
    Stock,
    /// Purchase orders.
    Orders,
    /// Confirmed arrivals against orders.
    Arrivals,
    /// Static stock ledger snapshot rows.
    StockLedger,
    /// Stock withdrawals.
    Withdrawals,
    /// Append-only withdrawal history mirror.
    History,
    /// Ephemeral notifications.
    Notifications,
}

impl CollectionKey {
    /// All collection keys, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Stock,
        Self::Orders,
        Self::Arrivals,
        Self::StockLedger,
        Self::Withdrawals,
        Self::History,
        Self::Notifications,
    ];

    /// Return the stable storage key string for this collection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Orders => "orders",
            Self::Arrivals => "arrivals",
            Self::StockLedger => "stock-ledger",
            Self::Withdrawals => "withdrawals",
            Self::History => "history",
            Self::Notifications => "notifications",
        }
    }

    /// Parse a storage key string back into a collection key.
    ///
    /// Returns `None` for unknown keys.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

impl core::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
