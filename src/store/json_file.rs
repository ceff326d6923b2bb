use super::StorageBackend;
use crate::error::{PlantError, Result};
use std::fs;
use std::path::PathBuf;

const DATA_FILENAME: &str = "plants.json";

/// File-based storage backend: the whole collection lives in one
/// `plants.json` under the given directory.
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(PlantError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.tmp", DATA_FILENAME))
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<String>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(&path).map_err(PlantError::Io)?;
        Ok(Some(payload))
    }

    fn write(&self, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        // Write to a temp file and rename so an interrupted write never
        // truncates the data file.
        let tmp = self.tmp_path();
        fs::write(&tmp, payload).map_err(PlantError::Io)?;
        fs::rename(&tmp, self.data_path()).map_err(PlantError::Io)?;
        Ok(())
    }
}
