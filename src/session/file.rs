use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::dirs::ensure_dir_exists;
use crate::filelock::{read_file_lock, remove_file, write_file_lock};

use super::KeyValueStore;

/// Durable store keeping one file per key under a directory.
///
/// Reads and writes hold an advisory lock on the entry's file, so several
/// `vle` processes can share a session directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir_exists(&dir)
            .with_context(|| format!("ensure session directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            bail!("invalid session key '{key}'");
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        let data = match read_file_lock(&path)? {
            Some(data) => data,
            None => return Ok(None),
        };
        let value = String::from_utf8(data)
            .with_context(|| format!("decode session entry '{key}' into utf-8"))?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        write_file_lock(&path, value.as_bytes())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        remove_file(&path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    use crate::session::{Session, TOKEN_KEY, USER_KEY};
    use crate::types::user::{AuthResponse, User};

    #[test]
    fn test_file_store() {
        let dir = PathBuf::from("_test_file_store");
        let _ = fs::remove_dir_all(&dir);

        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);

        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        store.set(TOKEN_KEY, "de").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("de"));

        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        store.remove(TOKEN_KEY).unwrap();

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = PathBuf::from("_test_file_session");
        let _ = fs::remove_dir_all(&dir);

        let session = Session::new(std::sync::Arc::new(FileStore::open(&dir).unwrap()));
        session
            .save(&AuthResponse {
                token: String::from("persisted"),
                user: User::new("Sam", "sam@example.com"),
            })
            .unwrap();

        let reopened = Session::new(std::sync::Arc::new(FileStore::open(&dir).unwrap()));
        assert!(reopened.is_logged_in());
        assert_eq!(reopened.token().as_deref(), Some("persisted"));
        assert!(dir.join(USER_KEY).exists());

        reopened.clear().unwrap();
        assert!(!dir.join(TOKEN_KEY).exists());
        assert!(!session.is_logged_in());

        fs::remove_dir_all(&dir).unwrap();
    }
}
