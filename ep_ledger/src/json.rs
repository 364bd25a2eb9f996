use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Number, Value};

use crate::shared::{LedgerError, LedgerStore};

/// Ledger mirrored to a JSON object on disk, rewritten in full on every flush.
#[derive(Debug, Clone)]
pub struct JsonLedger {
    path: PathBuf,
    entries: BTreeMap<String, f64>,
}

impl JsonLedger {
    /// Never fails: a missing file starts an empty ledger and a malformed one
    /// is discarded.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, f64>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    error!(
                        "Ledger `{}` is malformed, starting empty: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No ledger at `{}`, creating it", path.display());
                let ledger = Self {
                    path,
                    entries: BTreeMap::new(),
                };
                if let Err(e) = ledger.flush() {
                    warn!("{}", e);
                }
                return ledger;
            }
            Err(e) => {
                error!(
                    "Could not read ledger `{}`, starting empty: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Pretty printed with two space indentation. Whole totals are written as
/// integers so the file reads the same as one written by hand.
///
/// JSON has no infinity, such a total fails the whole write.
pub fn to_json(entries: &BTreeMap<String, f64>) -> Result<String, LedgerError> {
    let mut object = Map::with_capacity(entries.len());
    for (user, points) in entries {
        let value = if points.fract() == 0.0 && points.abs() < i64::MAX as f64 {
            Value::from(*points as i64)
        } else {
            match Number::from_f64(*points) {
                Some(number) => Value::Number(number),
                None => return Err(LedgerError::NonFinite { user: user.clone() }),
            }
        };
        object.insert(user.clone(), value);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(object))?)
}

impl LedgerStore for JsonLedger {
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
        let data = to_json(&self.entries)?;
        std::fs::write(&self.path, data).map_err(|source| LedgerError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            "Flushed {} ledger entries to `{}`",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ep_data.json");

        let mut ledger = JsonLedger::load(&path);
        ledger.add("111", 5.0).unwrap();
        ledger.add("111", 5.0).unwrap();
        ledger.set("222", 2.5);
        ledger.flush().unwrap();

        let reloaded = JsonLedger::load(&path);
        assert_eq!(reloaded.entries(), ledger.entries());
        assert_eq!(reloaded.get("111"), 10.0);
        assert_eq!(reloaded.get("222"), 2.5);
        assert_eq!(reloaded.get("333"), 0.0);
    }

    #[test]
    fn file_layout() {
        let mut entries = BTreeMap::new();
        entries.insert("1".to_owned(), 10.0);
        entries.insert("2".to_owned(), 2.5);
        assert_eq!(to_json(&entries).unwrap(), "{\n  \"1\": 10,\n  \"2\": 2.5\n}");
    }

    #[test]
    fn infinite_totals_are_never_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ep_data.json");
        let mut ledger = JsonLedger::load(&path);
        ledger.set("2", 42.0);
        ledger.flush().unwrap();

        ledger.set("1", f64::INFINITY);
        assert!(matches!(
            ledger.flush(),
            Err(LedgerError::NonFinite { user }) if user == "1"
        ));
        assert!(to_json(&BTreeMap::from([("1".to_owned(), f64::NAN)])).is_err());

        let reloaded = JsonLedger::load(&path);
        assert_eq!(reloaded.get("2"), 42.0);
        assert_eq!(reloaded.get("1"), 0.0);
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ep_data.json");
        let ledger = JsonLedger::load(&path);
        assert!(ledger.entries().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ep_data.json");
        std::fs::write(&path, "{ \"1\": 3, ").unwrap();
        let ledger = JsonLedger::load(&path);
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn flush_into_a_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = JsonLedger::load(dir.path().join("nope").join("ep_data.json"));
        ledger.set("1", 1.0);
        assert!(matches!(ledger.flush(), Err(LedgerError::Io { .. })));
    }
}
