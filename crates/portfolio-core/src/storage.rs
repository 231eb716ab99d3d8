//! Persistent preferences using redb.
//!
//! The site persists exactly one value, the theme preference, in a small
//! key/value table. The table is generic so the CLI and desktop app share
//! the same file layout.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::PortfolioResult;
use crate::theme::{Theme, ThemeStore, THEME_KEY};

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// File name used inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// Key/value preference storage backed by a redb file
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<RwLock<Database>>,
}

impl PreferenceStore {
    /// Open (or create) the preference database at `path`.
    ///
    /// Creates the parent directory and the preferences table if missing.
    pub fn open(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Preference store opened");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open `preferences.redb` inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> PortfolioResult<Self> {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn get(&self, key: &str) -> PortfolioResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove a key. Returns whether it was present.
    pub fn remove(&self, key: &str) -> PortfolioResult<bool> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            let existed = table.remove(key)?.is_some();
            existed
        };
        write_txn.commit()?;
        Ok(removed)
    }
}

impl ThemeStore for PreferenceStore {
    fn load(&self) -> PortfolioResult<Option<Theme>> {
        match self.get(THEME_KEY)? {
            Some(raw) => match raw.parse() {
                Ok(theme) => Ok(Some(theme)),
                Err(e) => {
                    tracing::warn!("Ignoring stored theme preference: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn save(&self, theme: Theme) -> PortfolioResult<()> {
        self.set(THEME_KEY, theme.as_str())
    }

    fn clear(&self) -> PortfolioResult<()> {
        self.remove(THEME_KEY).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PreferenceStore) {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::open_in(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_key_is_none() {
        let (_dir, store) = store();
        assert_eq!(store.get("nope").unwrap(), None);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn theme_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        {
            let store = PreferenceStore::open_in(dir.path()).unwrap();
            store.save(Theme::Light).unwrap();
        }
        let reopened = PreferenceStore::open_in(dir.path()).unwrap();
        assert_eq!(reopened.load().unwrap(), Some(Theme::Light));
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn clear_removes_theme() {
        let (_dir, store) = store();
        store.save(Theme::Dark).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.remove(THEME_KEY).unwrap());
    }

    #[test]
    fn garbage_value_loads_as_none() {
        let (_dir, store) = store();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn creates_nested_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        PreferenceStore::open_in(&nested).unwrap();
        assert!(nested.join(PREFERENCES_FILE).exists());
    }
}
