use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serenity::prelude::TypeMapKey;
use tokio::sync::RwLock;

/// Per user EP totals, keyed by the user id as a string.
pub trait LedgerStore: Send + Sync {
    /// Absent users have 0 EP.
    fn get(&self, user: &str) -> f64;

    fn set(&mut self, user: &str, points: f64);

    fn entries(&self) -> &BTreeMap<String, f64>;

    /// Write the whole ledger back to its storage.
    fn flush(&self) -> Result<(), LedgerError>;

    /// The total `user` would have after [`add`](Self::add), if it fits.
    fn total_after(&self, user: &str, points: f64) -> Result<f64, LedgerError> {
        let total = self.get(user) + points;
        if total.is_finite() {
            Ok(total)
        } else {
            Err(LedgerError::NonFinite {
                user: user.to_owned(),
            })
        }
    }

    /// Returns the new total. The entry is left untouched on error.
    fn add(&mut self, user: &str, points: f64) -> Result<f64, LedgerError> {
        let total = self.total_after(user, points)?;
        self.set(user, total);
        Ok(total)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("could not write ledger `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("EP total of `{user}` is not a finite number")]
    NonFinite { user: String },
    #[error("could not serialize ledger: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type SharedLedger = Arc<RwLock<Box<dyn LedgerStore>>>;

pub fn shared(store: impl LedgerStore + 'static) -> SharedLedger {
    Arc::new(RwLock::new(Box::new(store)))
}

pub struct LedgerKey;

impl TypeMapKey for LedgerKey {
    type Value = SharedLedger;
}
