use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::domain::LadderState;
use crate::errors::StoreError;

use super::{StateRepository, WriterLock};

/// Ladder state kept as a single pretty-printed JSON document.
///
/// Every write goes to its own temp file in the same directory, which is then
/// renamed over the target, so readers only ever see a complete snapshot.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_temp(&self, json: &str) -> Result<NamedTempFile, StoreError> {
        let parent = self.parent_dir();
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::io(parent, e))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| StoreError::io(temp.path(), e))?;
        Ok(temp)
    }

    fn swap_into_place(&self, temp: NamedTempFile) -> Result<(), StoreError> {
        // on failure the temp file is dropped and removed
        temp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        Ok(())
    }
}

impl StateRepository for JsonFileRepository {
    fn lock(&self) -> Result<WriterLock, StoreError> {
        WriterLock::acquire(&self.path)
    }

    fn load(&self) -> Result<LadderState, StoreError> {
        if !self.path.exists() {
            debug!("No state file at {}, starting empty", self.path.display());
            return Ok(LadderState::default());
        }

        let json = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let state = serde_json::from_str(&json)?;
        debug!("Loaded ladder state from {}", self.path.display());
        Ok(state)
    }

    fn save(&self, state: &LadderState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)?;
        let temp = self.write_temp(&json)?;
        self.swap_into_place(temp)?;
        debug!("Saved ladder state to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;
    use chrono::Utc;

    fn sample_state() -> LadderState {
        let mut state = LadderState::default();
        let alice = PlayerId::from("alice");
        let bob = PlayerId::from("bob");
        let mut record = state.players.get_or_create(&alice);
        record.points = 9;
        record.refresh_promotion_challenge();
        state.players.save(record);
        state.players.get_or_create(&bob);
        state.ledger.request_match(&alice, &bob, Utc::now()).unwrap();
        state
    }

    #[test]
    fn missing_file_loads_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileRepository::new(dir.path().join("state.json"));
        assert_eq!(repository.load().unwrap(), LadderState::default());
    }

    #[test]
    fn save_then_load_returns_same_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileRepository::new(dir.path().join("nested/state.json"));
        let state = sample_state();

        repository.save(&state).unwrap();

        assert_eq!(repository.load().unwrap(), state);
        let leftovers: Vec<_> = fs::read_dir(dir.path().join("nested"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("state.json")]);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));
    }

    #[test]
    fn failed_rename_keeps_old_state_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state");
        // a non-empty directory at the target makes the final rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = JsonFileRepository::new(&path)
            .save(&sample_state())
            .unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
        assert!(path.join("keep").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn interleaved_writers_each_use_their_own_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let first = JsonFileRepository::new(&path);
        let second = JsonFileRepository::new(&path);

        let pending_first = first.write_temp("{}").unwrap();
        let pending_second = second
            .write_temp(&serde_json::to_string(&sample_state()).unwrap())
            .unwrap();
        assert_ne!(pending_first.path(), pending_second.path());

        second.swap_into_place(pending_second).unwrap();
        first.swap_into_place(pending_first).unwrap();

        assert_eq!(first.load().unwrap(), LadderState::default());
    }
}
