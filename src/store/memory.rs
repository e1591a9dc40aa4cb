use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::LadderState;
use crate::errors::StoreError;

use super::{StateRepository, WriterLock};

/// Process-local repository, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: Mutex<LadderState>,
    fail_saves: AtomicBool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `save` fail until switched back.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> LadderState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StateRepository for MemoryRepository {
    fn lock(&self) -> Result<WriterLock, StoreError> {
        Ok(WriterLock::process_local())
    }

    fn load(&self) -> Result<LadderState, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, state: &LadderState) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory repository is refusing writes".to_string(),
            ));
        }

        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state.clone();
        Ok(())
    }
}
