use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{AppState, message, rejection};
use crate::api::models::{PlayerListResponse, PlayerStanding};
use crate::domain::PlayerId;

pub async fn get_players(State(state): State<Arc<AppState>>) -> Response {
    match state.ladder.leaderboard() {
        Ok(records) => {
            let items: Vec<PlayerStanding> = records
                .iter()
                .enumerate()
                .map(|(i, record)| PlayerStanding::new(i + 1, record))
                .collect();
            Json(PlayerListResponse {
                total: items.len(),
                items,
            })
            .into_response()
        }
        Err(e) => rejection(e),
    }
}

pub async fn get_player_detail(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Response {
    let player_id = PlayerId::from(player_id);

    match state.ladder.standing(&player_id) {
        Ok(Some(standing)) => {
            Json(PlayerStanding::new(standing.rank, &standing.record)).into_response()
        }
        Ok(None) => message(
            StatusCode::NOT_FOUND,
            format!("{player_id} has not played on the ladder yet"),
        ),
        Err(e) => rejection(e),
    }
}
