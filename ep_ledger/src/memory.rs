use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::shared::{LedgerError, LedgerStore};

/// Ledger without backing storage. Flushes are only counted.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    entries: BTreeMap<String, f64>,
    flushes: AtomicUsize,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            flushes: AtomicUsize::new(0),
        }
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::Relaxed)
    }
}

impl LedgerStore for MemoryLedger {
    fn get(&self, user: &str) -> f64 {
        self.entries.get(user).copied().unwrap_or(0.0)
    }

    fn set(&mut self, user: &str, points: f64) {
        self.entries.insert(user.to_owned(), points);
    }

    fn entries(&self) -> &BTreeMap<String, f64> {
        &self.entries
    }

    fn flush(&self) -> Result<(), LedgerError> {
        self.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
