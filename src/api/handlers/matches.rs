use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{AppState, ApproveParams, MatchFilter, ReportParams, RequestParams, rejection};
use crate::api::models::{MatchListResponse, MatchRequestResponse, ReportResponse};
use crate::domain::PlayerId;
use crate::presentation;

pub async fn request_match(
    State(state): State<Arc<AppState>>,
    Json(params): Json<RequestParams>,
) -> Response {
    let requester = PlayerId::from(params.requester);
    let opponent = PlayerId::from(params.opponent);

    match state.ladder.request_match(&requester, &opponent).await {
        Ok(request) => {
            let message = presentation::request_message(&request);
            (StatusCode::CREATED, Json(MatchRequestResponse { message, request })).into_response()
        }
        Err(e) => rejection(e),
    }
}

pub async fn approve_match(
    State(state): State<Arc<AppState>>,
    Json(params): Json<ApproveParams>,
) -> Response {
    let requester = PlayerId::from(params.requester);
    let approver = PlayerId::from(params.approver);

    match state.ladder.approve(&requester, &approver).await {
        Ok(request) => {
            let message = presentation::approve_message(&request);
            Json(MatchRequestResponse { message, request }).into_response()
        }
        Err(e) => rejection(e),
    }
}

pub async fn report_result(
    State(state): State<Arc<AppState>>,
    Json(params): Json<ReportParams>,
) -> Response {
    let winner = PlayerId::from(params.winner);
    let loser = PlayerId::from(params.loser);

    match state.ladder.report_result(&winner, &loser).await {
        Ok(outcome) => Json(ReportResponse {
            message: presentation::outcome_message(&outcome),
            winner_new_points: outcome.winner_new_points(),
            loser_new_points: outcome.loser_new_points(),
            outcome,
        })
        .into_response(),
        Err(e) => rejection(e),
    }
}

pub async fn list_matches(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MatchFilter>,
) -> Response {
    let player = filter.player.map(PlayerId::from);

    match state.ladder.pending_requests(player.as_ref()) {
        Ok(items) => Json(MatchListResponse {
            total: items.len(),
            items,
        })
        .into_response(),
        Err(e) => rejection(e),
    }
}
