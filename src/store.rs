//! Cumulative counts store: increment-or-insert keyed by a salted word hash.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::CloudError;

/// Derives the stable identifier a word is stored under. Swappable so the
/// scheme can change (e.g. to something reversible) without touching the
/// store itself.
pub trait WordKeyer {
    fn key(&self, word: &str) -> String;
}

/// Default derivation: SHA-256 over salt then word, lowercase hex.
#[derive(Debug, Clone)]
pub struct SaltedKeyer {
    salt: String,
}

impl SaltedKeyer {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl WordKeyer for SaltedKeyer {
    fn key(&self, word: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(word.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// One persisted record: the word and its cumulative count across requests.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StoredCount {
    pub word: String,
    pub count: u32,
}

/// In-memory counts map with JSON file persistence.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct CountStore {
    records: HashMap<String, StoredCount>,
}

impl CountStore {
    /// Add each ranked (word, count) pair: insert a new record, or add the
    /// count to the existing one under the same key.
    pub fn record(&mut self, ranked: &[(String, u32)], keyer: &impl WordKeyer) {
        for (word, count) in ranked {
            let id = keyer.key(word);
            self.records
                .entry(id)
                .and_modify(|r| r.count += count)
                .or_insert_with(|| StoredCount {
                    word: word.clone(),
                    count: *count,
                });
        }
    }

    /// All records, highest cumulative count first (admin listing order).
    pub fn all_descending(&self) -> Vec<StoredCount> {
        let mut records: Vec<StoredCount> = self.records.values().cloned().collect();
        records.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load from a JSON file; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, CloudError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| CloudError::Store(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Save to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), CloudError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CloudError::Store(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CountStore, SaltedKeyer, WordKeyer};

    fn ranked(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn key_is_stable_per_salt_and_word() {
        let keyer = SaltedKeyer::new("salt");
        assert_eq!(keyer.key("fox"), keyer.key("fox"));
        assert_ne!(keyer.key("fox"), keyer.key("dog"));
        assert_ne!(keyer.key("fox"), SaltedKeyer::new("other").key("fox"));
    }

    #[test]
    fn record_inserts_then_accumulates() {
        let keyer = SaltedKeyer::new("salt");
        let mut store = CountStore::default();

        store.record(&ranked(&[("fox", 2), ("dog", 1)]), &keyer);
        store.record(&ranked(&[("fox", 3)]), &keyer);

        let all = store.all_descending();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].word, "fox");
        assert_eq!(all[0].count, 5);
        assert_eq!(all[1].word, "dog");
        assert_eq!(all[1].count, 1);
    }

    #[test]
    fn save_and_load_round_trip() {
        let keyer = SaltedKeyer::new("salt");
        let mut store = CountStore::default();
        store.record(&ranked(&[("fox", 2)]), &keyer);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.json");
        store.save(&path).unwrap();

        let loaded = CountStore::load(&path).unwrap();
        let all = loaded.all_descending();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].word, "fox");
        assert_eq!(all[0].count, 2);
    }

    #[test]
    fn loading_a_missing_file_gives_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = CountStore::load(&dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }
}
