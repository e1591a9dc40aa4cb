use fs2::FileExt;
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::errors::StoreError;

/// Exclusive right to run load → mutate → save against one state location.
///
/// File-backed repositories hold an advisory lock on `<state>.lock`, which
/// excludes writers in other processes as well as other repositories opened
/// on the same path in this one. The lock is released on drop.
#[derive(Debug)]
pub struct WriterLock {
    _file: Option<File>,
}

impl WriterLock {
    /// For repositories whose state never leaves the process.
    pub fn process_local() -> Self {
        Self { _file: None }
    }

    /// Blocks until no other writer holds the lock for `state_path`.
    pub fn acquire(state_path: &Path) -> Result<Self, StoreError> {
        let lock_path = lock_path_for(state_path);
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StoreError::io(&lock_path, e))?;
        file.lock_exclusive()
            .map_err(|e| StoreError::io(&lock_path, e))?;

        debug!("Acquired writer lock {}", lock_path.display());
        Ok(Self { _file: Some(file) })
    }
}

fn lock_path_for(state_path: &Path) -> PathBuf {
    let mut name = state_path.as_os_str().to_os_string();
    name.push(".lock");
    PathBuf::from(name)
}
