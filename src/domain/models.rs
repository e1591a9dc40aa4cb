use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LadderResult;
use crate::rating::{self, Points, RankTier};

use super::ledger::MatchLedger;
use super::players::PlayerStore;

/// Opaque player identifier supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Ladder standing of a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub points: Points,
    pub promotion_challenge: bool,
}

impl PlayerRecord {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            points: 0,
            promotion_challenge: false,
        }
    }

    pub fn tier(&self) -> LadderResult<&'static RankTier> {
        rating::tier_of(self.points)
    }

    pub fn icon(&self) -> String {
        rating::icon_for(self.points, self.promotion_challenge)
    }

    /// Recomputes the challenge flag from the current total alone.
    pub fn refresh_promotion_challenge(&mut self) {
        self.promotion_challenge = rating::is_promotion_threshold(self.points);
    }
}

/// Directional ledger key: a request from A naming B differs from B naming A.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchKey {
    pub requester: PlayerId,
    pub opponent: PlayerId,
}

impl MatchKey {
    pub fn new(requester: &PlayerId, opponent: &PlayerId) -> Self {
        Self {
            requester: requester.clone(),
            opponent: opponent.clone(),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.requester, self.opponent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub requester: PlayerId,
    pub opponent: PlayerId,
    pub approved: bool,
    pub requested_at: DateTime<Utc>,
}

impl MatchRequest {
    pub fn new(requester: &PlayerId, opponent: &PlayerId, requested_at: DateTime<Utc>) -> Self {
        Self {
            requester: requester.clone(),
            opponent: opponent.clone(),
            approved: false,
            requested_at,
        }
    }

    pub fn key(&self) -> MatchKey {
        MatchKey::new(&self.requester, &self.opponent)
    }

    pub fn involves(&self, player: &PlayerId) -> bool {
        &self.requester == player || &self.opponent == player
    }
}

/// Scoring period. Stored and shown, nothing else depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EventWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Whole persisted snapshot, loaded and saved as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LadderState {
    #[serde(default)]
    pub players: PlayerStore,
    #[serde(default)]
    pub ledger: MatchLedger,
    #[serde(default)]
    pub event: Option<EventWindow>,
}
