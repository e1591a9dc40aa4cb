use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::domain::{EventWindow, LadderState, MatchRequest, PlayerId, PlayerRecord};
use crate::errors::LadderResult;
use crate::labels::{LabelClient, LabelUpdater};
use crate::store::{self, StateRepository};

use super::results::{self, MatchOutcome};

/// A player's place on the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub rank: usize,
    pub record: PlayerRecord,
}

/// Entry point for every ladder command.
///
/// Mutating operations run load → mutate → persist while holding the
/// repository's writer lock, which other processes on the same state honor
/// too, so concurrent commands never overwrite each other's snapshot. Tasks
/// in this process queue on `write_lock` first. Lookups read the repository
/// directly.
pub struct LadderService<L = LabelClient> {
    repository: Arc<dyn StateRepository>,
    labels: L,
    write_lock: Mutex<()>,
    label_lock: Mutex<()>,
}

impl LadderService<LabelClient> {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let repository = store::open_repository(&config.ladder)?;
        let labels = LabelClient::from_settings(&config.labels)?;
        Ok(Self::new(repository, labels))
    }
}

impl<L: LabelUpdater> LadderService<L> {
    pub fn new(repository: Arc<dyn StateRepository>, labels: L) -> Self {
        Self {
            repository,
            labels,
            write_lock: Mutex::new(()),
            label_lock: Mutex::new(()),
        }
    }

    pub async fn set_event_window(&self, window: EventWindow) -> LadderResult<EventWindow> {
        if window.is_inverted() {
            warn!("Event window starts after it ends: {} > {}", window.start, window.end);
        }

        self.transact(|state| {
            state.event = Some(window.clone());
            Ok(window)
        })
        .await
    }

    pub async fn request_match(
        &self,
        requester: &PlayerId,
        opponent: &PlayerId,
    ) -> LadderResult<MatchRequest> {
        let request = self
            .transact(|state| {
                let request = state.ledger.request_match(requester, opponent, Utc::now())?;
                state.players.get_or_create(requester);
                state.players.get_or_create(opponent);
                Ok(request)
            })
            .await?;

        info!("{} requested a match against {}", requester, opponent);
        Ok(request)
    }

    pub async fn approve(
        &self,
        requester: &PlayerId,
        approver: &PlayerId,
    ) -> LadderResult<MatchRequest> {
        let request = self
            .transact(|state| state.ledger.approve(requester, approver))
            .await?;

        info!("{} approved the match requested by {}", approver, requester);
        Ok(request)
    }

    pub async fn report_result(
        &self,
        winner: &PlayerId,
        loser: &PlayerId,
    ) -> LadderResult<MatchOutcome> {
        let (outcome, _label_turn) = {
            let _guard = self.write_lock.lock().await;
            let outcome = self.commit(|state| results::report_result(state, winner, loser))?;
            // taken before the write lock is released so labels go out in
            // commit order
            (outcome, self.label_lock.lock().await)
        };

        self.refresh_label(&outcome.winner).await;
        self.refresh_label(&outcome.loser).await;
        Ok(outcome)
    }

    pub fn standing(&self, player: &PlayerId) -> LadderResult<Option<Standing>> {
        let ranked = self.repository.load()?.players.ranked();
        let standing = ranked
            .into_iter()
            .enumerate()
            .find(|(_, record)| &record.id == player)
            .map(|(i, record)| Standing {
                rank: i + 1,
                record,
            });
        Ok(standing)
    }

    pub fn leaderboard(&self) -> LadderResult<Vec<PlayerRecord>> {
        Ok(self.repository.load()?.players.ranked())
    }

    pub fn pending_requests(&self, player: Option<&PlayerId>) -> LadderResult<Vec<MatchRequest>> {
        let state = self.repository.load()?;
        let requests = match player {
            Some(player) => state.ledger.involving(player).cloned().collect(),
            None => state.ledger.pending().cloned().collect(),
        };
        Ok(requests)
    }

    pub fn event_window(&self) -> LadderResult<Option<EventWindow>> {
        Ok(self.repository.load()?.event)
    }

    async fn transact<T, F>(&self, mutate: F) -> LadderResult<T>
    where
        F: FnOnce(&mut LadderState) -> LadderResult<T> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        self.commit(mutate)
    }

    fn commit<T, F>(&self, mutate: F) -> LadderResult<T>
    where
        F: FnOnce(&mut LadderState) -> LadderResult<T>,
    {
        let _writer = self.repository.lock()?;

        let mut state = self.repository.load()?;
        let value = mutate(&mut state)?;
        self.repository.save(&state)?;

        Ok(value)
    }

    async fn refresh_label(&self, record: &PlayerRecord) {
        let icon = record.icon();
        if let Err(e) = self.labels.update_label(&record.id, &icon).await {
            warn!("Could not update label for {}: {}", record.id, e);
        }
    }
}
