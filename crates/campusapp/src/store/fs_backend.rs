use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::backend::StorageBackend;
use crate::error::{CampusError, Result};
use crate::model::Snapshot;

const DATA_FILE: &str = "data.json";

/// Filesystem backend: the whole document lives in `<root>/data.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CampusError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<Snapshot>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(data_file).map_err(CampusError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(CampusError::Serialization)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(snapshot).map_err(CampusError::Serialization)?;

        // Atomic write: tmp file then rename
        let tmp_file = self.root.join(format!(".data-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(CampusError::Io)?;
        fs::rename(&tmp_file, self.data_path()).map_err(CampusError::Io)?;

        Ok(())
    }
}
