use thiserror::Error;

/// PostgreSQL SQLSTATE for a foreign-key violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Errors surfaced by the ledger core
///
/// The engine performs no local recovery: any failure inside a transfer
/// transaction rolls the whole transaction back and the cause is returned
/// here. Retry policy, if any, belongs to the caller.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("transfer amount must be positive, got {0}")]
    InvalidAmount(i64),

    #[error("account {0} does not exist")]
    UnknownAccount(i64),

    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("storage error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl LedgerError {
    /// Classify a storage failure from an operation touching one account.
    ///
    /// A foreign-key violation on insert and a zero-row `UPDATE ... RETURNING`
    /// both mean the referenced account does not exist; everything else is a
    /// storage fault.
    pub(crate) fn for_account(err: sqlx::Error, account_id: i64) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return LedgerError::UnknownAccount(account_id);
        }
        if let sqlx::Error::Database(db) = &err
            && db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
        {
            return LedgerError::UnknownAccount(account_id);
        }
        LedgerError::Persistence(err)
    }

    /// Classify a storage failure from the transfer insert, which references
    /// both accounts. The violated constraint name tells the sides apart.
    pub(crate) fn for_transfer(err: sqlx::Error, source: i64, destination: i64) -> Self {
        if let sqlx::Error::Database(db) = &err
            && db.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
        {
            let account_id = match db.constraint() {
                Some(name) if name.contains("destination") => destination,
                _ => source,
            };
            return LedgerError::UnknownAccount(account_id);
        }
        LedgerError::Persistence(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_row_maps_to_unknown_account() {
        let err = LedgerError::for_account(sqlx::Error::RowNotFound, 42);
        assert!(matches!(err, LedgerError::UnknownAccount(42)));
    }

    #[test]
    fn test_other_errors_map_to_persistence() {
        let err = LedgerError::for_account(sqlx::Error::PoolClosed, 42);
        assert!(matches!(err, LedgerError::Persistence(_)));

        let err = LedgerError::for_transfer(sqlx::Error::WorkerCrashed, 1, 2);
        assert!(matches!(err, LedgerError::Persistence(_)));
    }
}
