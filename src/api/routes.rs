use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    event::{get_event, set_event},
    matches::{approve_match, list_matches, report_result, request_match},
    players::{get_player_detail, get_players},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(get_players))
        .route("/api/players/:id", get(get_player_detail))
        .route("/api/matches", get(list_matches))
        .route("/api/matches/request", post(request_match))
        .route("/api/matches/approve", post(approve_match))
        .route("/api/matches/report", post(report_result))
        .route("/api/event", get(get_event).put(set_event))
        .with_state(state)
}
