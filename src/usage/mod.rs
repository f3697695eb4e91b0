#[cfg(test)]
mod tests;

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{DirStore, Store, StoreError, USAGE_KEY};

/// Durable running total plus append-only event history for token
/// consumption against one output directory.
///
/// Invariant: `total` equals the sum of `tokens` over `history` — every
/// append increments the total and rewrites the ledger as one unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageLedger {
    pub total: i64,
    pub history: Vec<UsageEvent>,
}

/// One recorded consumption event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageEvent {
    /// RFC 3339 UTC timestamp taken at record time
    pub timestamp: String,
    /// Amount consumed. Deliberately unvalidated: negative entries are
    /// accepted as corrections and reduce the running total.
    pub tokens: i64,
    /// Free-text label for what consumed the tokens
    pub action: String,
}

/// Append a usage event and return the updated ledger.
///
/// The ledger starts from the zero state the first time a directory is
/// used; thereafter it grows monotonically, rewritten wholesale on every
/// append. Read-modify-write is unguarded, so concurrent writers against
/// the same directory can lose an update.
pub fn record_usage(store: &dyn Store, tokens: i64, action: &str) -> Result<UsageLedger> {
    let mut ledger = read_ledger(store)?;

    ledger.total += tokens;
    ledger.history.push(UsageEvent {
        timestamp: Utc::now().to_rfc3339(),
        tokens,
        action: action.to_string(),
    });

    store.put(USAGE_KEY, &serde_json::to_string_pretty(&ledger)?)?;
    Ok(ledger)
}

/// Load the current ledger, or the zero-state ledger if none was ever
/// written.
pub fn read_ledger(store: &dyn Store) -> Result<UsageLedger> {
    match store.get(USAGE_KEY) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(StoreError::KeyNotFound(_)) => Ok(UsageLedger::default()),
        Err(err) => Err(Error::Store(err)),
    }
}

/// Record a usage event against `output_dir`, creating it if needed.
pub fn track_usage(output_dir: &Path, tokens: i64, action: &str) -> Result<UsageLedger> {
    let store = DirStore::create(output_dir)?;
    record_usage(&store, tokens, action)
}
