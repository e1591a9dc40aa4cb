pub mod ledger;
pub mod models;
pub mod players;

pub use ledger::MatchLedger;
pub use models::{EventWindow, LadderState, MatchKey, MatchRequest, PlayerId, PlayerRecord};
pub use players::PlayerStore;
