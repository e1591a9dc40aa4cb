pub mod json_file;
pub mod lock;
pub mod memory;

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::config::settings::{LadderSettings, StoreKind};
use crate::database::SqliteRepository;
use crate::domain::LadderState;
use crate::errors::StoreError;

pub use json_file::JsonFileRepository;
pub use lock::WriterLock;
pub use memory::MemoryRepository;

/// Whole-snapshot persistence for the ladder.
///
/// `save` must be atomic: after a failed or interrupted save, `load` returns
/// the previous snapshot. A repository that was never written loads as the
/// empty state.
///
/// Writers hold `lock` across the whole load → mutate → save cycle. For
/// file-backed repositories it must exclude writers in other processes too.
pub trait StateRepository: Send + Sync {
    fn lock(&self) -> Result<WriterLock, StoreError>;
    fn load(&self) -> Result<LadderState, StoreError>;
    fn save(&self, state: &LadderState) -> Result<(), StoreError>;
}

pub fn open_repository(settings: &LadderSettings) -> Result<Arc<dyn StateRepository>> {
    info!(
        "Opening {} ladder state at {}",
        settings.store,
        settings.state_path.display()
    );

    let repository: Arc<dyn StateRepository> = match settings.store {
        StoreKind::Json => Arc::new(JsonFileRepository::new(&settings.state_path)),
        StoreKind::Sqlite => Arc::new(SqliteRepository::open(&settings.state_path)?),
    };
    Ok(repository)
}
