use std::fmt;

use crate::domain::{MatchKey, PlayerId};
use crate::errors::StoreError;

const PLAYER_PREFIX: &str = "player";
const MATCH_PREFIX: &str = "match";
const EVENT_KEY: &str = "event";

/// Row key of one record in the `ladder_state` table.
///
/// Ids are percent-encoded so a `:` inside an id never splits a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKey {
    Player(PlayerId),
    Match(MatchKey),
    Event,
}

impl StateKey {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let mut parts = raw.split(':');
        let key = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(PLAYER_PREFIX), Some(id), None, None) => StateKey::Player(decode_id(raw, id)?),
            (Some(MATCH_PREFIX), Some(requester), Some(opponent), None) => {
                StateKey::Match(MatchKey {
                    requester: decode_id(raw, requester)?,
                    opponent: decode_id(raw, opponent)?,
                })
            }
            (Some(EVENT_KEY), None, None, None) => StateKey::Event,
            _ => return Err(StoreError::MalformedKey(raw.to_string())),
        };
        Ok(key)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Player(id) => write!(f, "{PLAYER_PREFIX}:{}", encode_id(id)),
            StateKey::Match(key) => write!(
                f,
                "{MATCH_PREFIX}:{}:{}",
                encode_id(&key.requester),
                encode_id(&key.opponent)
            ),
            StateKey::Event => f.write_str(EVENT_KEY),
        }
    }
}

fn encode_id(id: &PlayerId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

fn decode_id(raw: &str, encoded: &str) -> Result<PlayerId, StoreError> {
    urlencoding::decode(encoded)
        .map(|id| PlayerId::new(id.into_owned()))
        .map_err(|_| StoreError::MalformedKey(raw.to_string()))
}
