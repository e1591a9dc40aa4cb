use std::path::PathBuf;

use crate::domain::PlayerId;
use crate::rating::Points;

pub type LadderResult<T> = std::result::Result<T, LadderError>;

/// Outcomes a ladder operation can be rejected with.
///
/// Everything except `Storage` is an expected, user-correctable result that
/// the dispatcher renders verbatim.
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    #[error("{requester} has already challenged {opponent}; that request is still open")]
    AlreadyRequested {
        requester: PlayerId,
        opponent: PlayerId,
    },

    #[error("there is no match request from {requester} to {approver}")]
    NoSuchRequest {
        requester: PlayerId,
        approver: PlayerId,
    },

    #[error("{winner} never requested a match against {loser}")]
    NotRequested { winner: PlayerId, loser: PlayerId },

    #[error("the match {winner} requested against {loser} has not been approved yet")]
    NotApproved { winner: PlayerId, loser: PlayerId },

    #[error("{player} cannot request a match against themselves")]
    SelfMatch { player: PlayerId },

    #[error("no rank tier covers {points} points")]
    NoMatchingTier { points: Points },

    #[error("ladder state is unavailable: {0}")]
    Storage(#[from] StoreError),
}

/// Failures of a state repository. Never retried by the core.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file I/O failed for {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state could not be encoded or decoded: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("sqlite state store failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("sqlite connection pool failed: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("malformed state key: {0}")]
    MalformedKey(String),

    #[error("state repository unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures of the best-effort display-label side effect.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("label webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("label webhook rejected the update with status {0}")]
    Rejected(reqwest::StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_name_both_players() {
        let err = LadderError::NotApproved {
            winner: PlayerId::from("alice"),
            loser: PlayerId::from("bob"),
        };
        assert_eq!(
            err.to_string(),
            "the match alice requested against bob has not been approved yet"
        );

        let err = LadderError::AlreadyRequested {
            requester: PlayerId::from("alice"),
            opponent: PlayerId::from("bob"),
        };
        assert!(err.to_string().starts_with("alice has already challenged bob"));
    }

    #[test]
    fn storage_errors_convert_into_ladder_errors() {
        let err: LadderError = StoreError::Unavailable("disk full".to_string()).into();
        assert!(matches!(err, LadderError::Storage(_)));
        assert_eq!(
            err.to_string(),
            "ladder state is unavailable: state repository unavailable: disk full"
        );
    }
}
