//! Double-entry ledger transfer engine
//!
//! Given a source account, a destination account, and an amount, the engine
//! atomically records a transfer, two balancing entries, and two balance
//! updates against a PostgreSQL store, or it records nothing.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`db`] - PostgreSQL connection pool management
//! - [`ledger`] - Ledger store primitives and the transfer engine
//! - [`logging`] - File/stdout tracing setup

pub mod config;
pub mod db;
pub mod ledger;
pub mod logging;

// Convenient re-exports at crate root
pub use config::{AppConfig, DatabaseConfig};
pub use db::Database;
pub use ledger::{
    Account, Entry, LedgerError, LedgerStore, LedgerTx, Transfer, TransferEngine, TransferResult,
};
