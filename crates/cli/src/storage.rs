//! File-backed persistence for the collection store.
//!
//! Each key is stored as `<data_dir>/<key>.json`. Writes go to a sibling
//! temp file first and are renamed into place, so an interrupted write
//! leaves the previous value intact.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use nedge_core::{NoopPersistence, PersistenceAdapter, PersistenceError};
use tracing::warn;

use crate::config::{CliConfig, PersistenceMode};

/// Persistence adapter writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    /// Create an adapter rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistenceAdapter for FilePersistence {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read stored collection");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let write_err = |source: std::io::Error| PersistenceError::Write {
            key: key.to_owned(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)
    }
}

/// Pick the adapter the configuration asks for.
#[must_use]
pub fn open(config: &CliConfig) -> Box<dyn PersistenceAdapter> {
    match config.persistence {
        PersistenceMode::File => Box::new(FilePersistence::new(&config.data_dir)),
        PersistenceMode::None => Box::new(NoopPersistence),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nedge_core::collections::keys;

    use super::*;

    #[test]
    fn test_missing_key_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = FilePersistence::new(dir.path());
        assert_eq!(adapter.load(keys::BOOKMARKS), None);
    }

    #[test]
    fn test_save_then_load_from_new_adapter() {
        let dir = tempfile::tempdir().unwrap();
        let mut adapter = FilePersistence::new(dir.path());
        adapter.save(keys::FOLLOWING, r#"[{"name":"Jane","link":""}]"#).unwrap();

        let reopened = FilePersistence::new(dir.path());
        assert_eq!(
            reopened.load(keys::FOLLOWING).as_deref(),
            Some(r#"[{"name":"Jane","link":""}]"#)
        );
        assert!(dir.path().join("nedge-following.json").exists());
        assert!(!dir.path().join("nedge-following.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("profile").join("default");
        let mut adapter = FilePersistence::new(&nested);

        adapter.save(keys::WARDROBE, "[]").unwrap();

        assert_eq!(adapter.load(keys::WARDROBE).as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut adapter = FilePersistence::new(dir.path());
        adapter.save(keys::WARDROBE, "[1]").unwrap();
        adapter.save(keys::WARDROBE, "[]").unwrap();
        assert_eq!(adapter.load(keys::WARDROBE).as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut adapter = FilePersistence::new(&blocker);
        let err = adapter.save(keys::BOOKMARKS, "[]").unwrap_err();
        assert!(matches!(err, PersistenceError::Write { ref key, .. } if key == keys::BOOKMARKS));
    }

    #[test]
    fn test_open_respects_mode() {
        let config = CliConfig {
            data_dir: PathBuf::from("unused"),
            persistence: PersistenceMode::None,
        };
        assert!(!open(&config).is_available());

        let config = CliConfig {
            persistence: PersistenceMode::File,
            ..config
        };
        assert!(open(&config).is_available());
    }
}
