//! Double-entry ledger core
//!
//! PostgreSQL-backed storage for accounts, entries, and transfers, plus the
//! transfer engine that composes them atomically.

pub mod engine;
pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod integration_tests;

// Re-export commonly used types
pub use engine::{TransferEngine, TransferResult};
pub use error::LedgerError;
pub use models::{Account, Entry, Transfer, currency};
pub use store::{LedgerStore, LedgerTx, init_schema};
