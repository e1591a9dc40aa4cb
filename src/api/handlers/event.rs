use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{AppState, rejection};
use crate::api::models::EventResponse;
use crate::domain::EventWindow;
use crate::presentation;

pub async fn get_event(State(state): State<Arc<AppState>>) -> Response {
    match state.ladder.event_window() {
        Ok(event) => {
            let message = event
                .as_ref()
                .map(presentation::event_message)
                .unwrap_or_else(|| "No event is scheduled.".to_string());
            Json(EventResponse { message, event }).into_response()
        }
        Err(e) => rejection(e),
    }
}

pub async fn set_event(
    State(state): State<Arc<AppState>>,
    Json(window): Json<EventWindow>,
) -> Response {
    match state.ladder.set_event_window(window).await {
        Ok(event) => Json(EventResponse {
            message: presentation::event_message(&event),
            event: Some(event),
        })
        .into_response(),
        Err(e) => rejection(e),
    }
}
