use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::models::MessageResponse;
use crate::errors::LadderError;
use crate::services::LadderService;

pub mod event;
pub mod matches;
pub mod players;

pub struct AppState {
    pub ladder: LadderService,
}

#[derive(Deserialize)]
pub struct RequestParams {
    pub requester: String,
    pub opponent: String,
}

#[derive(Deserialize)]
pub struct ApproveParams {
    pub requester: String,
    pub approver: String,
}

#[derive(Deserialize)]
pub struct ReportParams {
    pub winner: String,
    pub loser: String,
}

#[derive(Deserialize)]
pub struct MatchFilter {
    pub player: Option<String>,
}

pub fn status_for(err: &LadderError) -> StatusCode {
    match err {
        LadderError::AlreadyRequested { .. }
        | LadderError::NotApproved { .. }
        | LadderError::SelfMatch { .. } => StatusCode::CONFLICT,
        LadderError::NoSuchRequest { .. } | LadderError::NotRequested { .. } => {
            StatusCode::NOT_FOUND
        }
        LadderError::NoMatchingTier { .. } | LadderError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Renders a rejected command as a status code plus readable message.
pub fn rejection(err: LadderError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        log::error!("Ladder command failed: {}", err);
    }

    message(status, err.to_string())
}

pub fn message(status: StatusCode, message: String) -> Response {
    (status, Json(MessageResponse { message })).into_response()
}
