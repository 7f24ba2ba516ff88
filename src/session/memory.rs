use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{bail, Result};

use super::KeyValueStore;

/// Process-local store, nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = match self.entries.read() {
            Ok(entries) => entries,
            Err(_) => bail!("memory store lock poisoned"),
        };
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(_) => bail!("memory store lock poisoned"),
        };
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(_) => bail!("memory store lock poisoned"),
        };
        entries.remove(key);
        Ok(())
    }
}
