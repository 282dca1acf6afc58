//! Row types for accounts, entries, and transfers
//!
//! Balances and amounts are integral smallest-currency-unit values (e.g.
//! cents). Floating point never touches money.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Supported currencies
// ============================================================================
pub mod currency {
    pub const USD: &str = "USD";
    pub const EUR: &str = "EUR";
    pub const CAD: &str = "CAD";

    /// Currency codes accounts may be created with
    pub fn is_supported(code: &str) -> bool {
        matches!(code, USD | EUR | CAD)
    }
}

/// Account row
///
/// The balance is only ever mutated through arithmetic delta updates, never
/// overwritten. It may go negative; sufficient-funds enforcement belongs to
/// the caller.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub balance: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// One signed balance movement against a single account
///
/// Negative amount = debit, positive = credit. Never updated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: i64,
    pub account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Record of funds moving between two accounts
///
/// The two entry rows are its ledger-level realization. Never updated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transfer {
    pub id: i64,
    pub source_account_id: i64,
    pub destination_account_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_currencies() {
        assert!(currency::is_supported("USD"));
        assert!(currency::is_supported("EUR"));
        assert!(currency::is_supported("CAD"));
    }

    #[test]
    fn test_unsupported_currencies() {
        assert!(!currency::is_supported("JPY"));
        assert!(!currency::is_supported("usd")); // case-sensitive
        assert!(!currency::is_supported(""));
    }
}
