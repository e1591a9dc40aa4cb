use log::debug;
use rusqlite::params;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{EventWindow, LadderState, MatchLedger, MatchRequest, PlayerRecord};
use crate::errors::StoreError;
use crate::store::{StateRepository, WriterLock};

use super::connection::{DbPool, create_pool, get_connection};
use super::keys::StateKey;
use super::setup::ensure_schema;

/// Ladder state as keyed rows in SQLite. Every save rewrites all rows inside
/// one transaction, so a snapshot is either fully replaced or untouched.
/// Load and save are separate transactions; writers serialize on the
/// `<db>.lock` file.
pub struct SqliteRepository {
    path: PathBuf,
    pool: DbPool,
}

impl SqliteRepository {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let pool = create_pool(path)?;
        let mut conn = get_connection(&pool)?;
        ensure_schema(&mut conn)?;

        Ok(Self {
            path: path.to_path_buf(),
            pool,
        })
    }
}

impl StateRepository for SqliteRepository {
    fn lock(&self) -> Result<WriterLock, StoreError> {
        WriterLock::acquire(&self.path)
    }

    fn load(&self) -> Result<LadderState, StoreError> {
        let conn = get_connection(&self.pool)?;
        let mut stmt = conn.prepare("SELECT key, value FROM ladder_state ORDER BY key")?;
        let rows = stmt
            .query_map([], parse_state_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let state = decode_rows(rows)?;
        debug!(
            "Loaded {} players and {} match requests from sqlite",
            state.players.len(),
            state.ledger.len()
        );
        Ok(state)
    }

    fn save(&self, state: &LadderState) -> Result<(), StoreError> {
        let rows = encode_rows(state)?;

        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM ladder_state", [])?;
        {
            let mut insert = tx.prepare("INSERT INTO ladder_state (key, value) VALUES (?1, ?2)")?;
            for (key, value) in &rows {
                insert.execute(params![key.to_string(), value])?;
            }
        }
        tx.commit()?;

        debug!("Saved {} ladder rows to sqlite", rows.len());
        Ok(())
    }
}

fn parse_state_row(row: &rusqlite::Row) -> rusqlite::Result<(String, String)> {
    Ok((row.get(0)?, row.get(1)?))
}

fn encode_rows(state: &LadderState) -> Result<Vec<(StateKey, String)>, StoreError> {
    let mut rows = Vec::with_capacity(state.players.len() + state.ledger.len() + 1);

    for record in state.players.iter() {
        rows.push((
            StateKey::Player(record.id.clone()),
            serde_json::to_string(record)?,
        ));
    }
    for request in state.ledger.pending() {
        rows.push((StateKey::Match(request.key()), serde_json::to_string(request)?));
    }
    if let Some(event) = &state.event {
        rows.push((StateKey::Event, serde_json::to_string(event)?));
    }

    Ok(rows)
}

fn decode_rows(rows: Vec<(String, String)>) -> Result<LadderState, StoreError> {
    let mut state = LadderState::default();
    let mut requests = Vec::new();

    for (raw_key, value) in rows {
        match StateKey::parse(&raw_key)? {
            StateKey::Player(id) => {
                let record: PlayerRecord = serde_json::from_str(&value)?;
                if record.id != id {
                    return Err(StoreError::MalformedKey(raw_key));
                }
                state.players.save(record);
            }
            StateKey::Match(key) => {
                let request: MatchRequest = serde_json::from_str(&value)?;
                if request.key() != key {
                    return Err(StoreError::MalformedKey(raw_key));
                }
                requests.push(request);
            }
            StateKey::Event => {
                let event: EventWindow = serde_json::from_str(&value)?;
                state.event = Some(event);
            }
        }
    }

    state.ledger = MatchLedger::from(requests);
    Ok(state)
}
