use super::backend::KvBackend;
use super::keys;
use crate::error::{PassportError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// Stores each key in its own small file inside a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn filename(key: &str) -> String {
        if keys::is_json(key) {
            format!("{}.json", key)
        } else {
            key.to_string()
        }
    }

    fn ensure_dir(&self, key: &str) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| PassportError::write(key, e))?;
        }
        Ok(())
    }
}

impl KvBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.location(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PassportError::read(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir(key)?;

        // Atomic write: a failed write never clobbers the previous value
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, value) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PassportError::write(key, e));
        }
        if let Err(e) = fs::rename(&tmp_file, self.location(key)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PassportError::write(key, e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.location(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PassportError::write(key, e)),
        }
    }

    fn location(&self, key: &str) -> PathBuf {
        self.root.join(Self::filename(key))
    }
}
