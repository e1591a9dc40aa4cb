use serde::Serialize;

use crate::domain::{EventWindow, MatchRequest, PlayerRecord};
use crate::rating::Points;
use crate::services::MatchOutcome;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStanding {
    pub rank: usize,
    pub player_id: String,
    pub points: Points,
    pub tier: String,
    pub icon: String,
    pub promotion_challenge: bool,
}

impl PlayerStanding {
    pub fn new(rank: usize, record: &PlayerRecord) -> Self {
        Self {
            rank,
            player_id: record.id.to_string(),
            points: record.points,
            tier: record
                .tier()
                .map(|tier| tier.name.to_string())
                .unwrap_or_default(),
            icon: record.icon(),
            promotion_challenge: record.promotion_challenge,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListResponse {
    pub items: Vec<PlayerStanding>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequestResponse {
    pub message: String,
    pub request: MatchRequest,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchListResponse {
    pub items: Vec<MatchRequest>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub message: String,
    pub winner_new_points: Points,
    pub loser_new_points: Points,
    pub outcome: MatchOutcome,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub message: String,
    pub event: Option<EventWindow>,
}
