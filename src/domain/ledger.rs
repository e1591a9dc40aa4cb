use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{LadderError, LadderResult};

use super::models::{MatchKey, MatchRequest, PlayerId};

/// Open match requests, at most one per ordered (requester, opponent) pair.
///
/// Persisted as a plain list of requests; the key is rebuilt on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<MatchRequest>", into = "Vec<MatchRequest>")]
pub struct MatchLedger {
    entries: BTreeMap<MatchKey, MatchRequest>,
}

impl MatchLedger {
    pub fn request_match(
        &mut self,
        requester: &PlayerId,
        opponent: &PlayerId,
        requested_at: DateTime<Utc>,
    ) -> LadderResult<MatchRequest> {
        if requester == opponent {
            return Err(LadderError::SelfMatch {
                player: requester.clone(),
            });
        }

        let key = MatchKey::new(requester, opponent);
        if self.entries.contains_key(&key) {
            return Err(LadderError::AlreadyRequested {
                requester: key.requester,
                opponent: key.opponent,
            });
        }

        let request = MatchRequest::new(requester, opponent, requested_at);
        self.entries.insert(key, request.clone());
        Ok(request)
    }

    /// Marks the request `requester` sent to `approver` as approved.
    pub fn approve(
        &mut self,
        requester: &PlayerId,
        approver: &PlayerId,
    ) -> LadderResult<MatchRequest> {
        let key = MatchKey::new(requester, approver);
        let request = self
            .entries
            .get_mut(&key)
            .ok_or_else(|| LadderError::NoSuchRequest {
                requester: requester.clone(),
                approver: approver.clone(),
            })?;

        request.approved = true;
        Ok(request.clone())
    }

    /// Removes the approved request `winner` sent to `loser`.
    pub fn consume_if_approved(
        &mut self,
        winner: &PlayerId,
        loser: &PlayerId,
    ) -> LadderResult<MatchRequest> {
        let key = MatchKey::new(winner, loser);
        let not_requested = || LadderError::NotRequested {
            winner: winner.clone(),
            loser: loser.clone(),
        };

        match self.entries.get(&key).map(|request| request.approved) {
            None => Err(not_requested()),
            Some(false) => Err(LadderError::NotApproved {
                winner: winner.clone(),
                loser: loser.clone(),
            }),
            Some(true) => self.entries.remove(&key).ok_or_else(not_requested),
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &MatchRequest> {
        self.entries.values()
    }

    pub fn involving<'a>(&'a self, player: &'a PlayerId) -> impl Iterator<Item = &'a MatchRequest> {
        self.entries.values().filter(move |request| request.involves(player))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<MatchRequest>> for MatchLedger {
    fn from(requests: Vec<MatchRequest>) -> Self {
        let entries = requests
            .into_iter()
            .map(|request| (request.key(), request))
            .collect();
        Self { entries }
    }
}

impl From<MatchLedger> for Vec<MatchRequest> {
    fn from(ledger: MatchLedger) -> Self {
        ledger.entries.into_values().collect()
    }
}
