use log::info;
use serde::Serialize;
use std::future::Future;
use tokio::sync::Mutex;

use crate::config::LabelSettings;
use crate::domain::PlayerId;
use crate::errors::LabelError;
use crate::http::RateLimitedClient;

/// Pushes a player's rank icon to wherever their display name lives.
///
/// Callers treat this as best effort: an error is logged, never propagated
/// into the ladder operation that triggered it.
pub trait LabelUpdater: Send + Sync {
    fn update_label(
        &self,
        player: &PlayerId,
        icon: &str,
    ) -> impl Future<Output = Result<(), LabelError>> + Send;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelUpdate<'a> {
    player_id: &'a str,
    icon: &'a str,
}

struct Webhook {
    url: String,
    client: Mutex<RateLimitedClient>,
}

/// Label updater backed by an optional webhook. Without one, updates are
/// only logged.
pub struct LabelClient {
    webhook: Option<Webhook>,
}

impl LabelClient {
    pub fn disabled() -> Self {
        Self { webhook: None }
    }

    pub fn from_settings(settings: &LabelSettings) -> anyhow::Result<Self> {
        let Some(url) = settings.webhook_url.clone() else {
            return Ok(Self::disabled());
        };

        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            webhook: Some(Webhook {
                url,
                client: Mutex::new(client),
            }),
        })
    }
}

impl LabelUpdater for LabelClient {
    async fn update_label(&self, player: &PlayerId, icon: &str) -> Result<(), LabelError> {
        let Some(webhook) = &self.webhook else {
            info!("Label for {} is now {}", player, icon);
            return Ok(());
        };

        let update = LabelUpdate {
            player_id: player.as_str(),
            icon,
        };
        let response = webhook.client.lock().await.post_json(&webhook.url, &update).await?;

        if !response.status().is_success() {
            return Err(LabelError::Rejected(response.status()));
        }

        info!("Pushed label {} for {}", icon, player);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use serde_json::Value;
    use std::sync::Arc;

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn record(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
        received.lock().await.push(body);
        StatusCode::NO_CONTENT
    }

    async fn spawn_webhook(failing: bool) -> (String, Received) {
        let received: Received = Arc::default();
        let app = if failing {
            Router::new()
                .route("/labels", post(|| async { StatusCode::SERVICE_UNAVAILABLE }))
                .with_state(received.clone())
        } else {
            Router::new()
                .route("/labels", post(record))
                .with_state(received.clone())
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/labels"), received)
    }

    fn settings_for(url: String) -> LabelSettings {
        LabelSettings {
            webhook_url: Some(url),
            rate_limit_ms: 0,
            ..LabelSettings::default()
        }
    }

    #[tokio::test]
    async fn disabled_client_only_logs() {
        let client = LabelClient::from_settings(&LabelSettings::default()).unwrap();
        assert!(client.webhook.is_none());
        client.update_label(&PlayerId::from("alice"), "🥉").await.unwrap();
    }

    #[tokio::test]
    async fn webhook_receives_player_and_icon() {
        let (url, received) = spawn_webhook(false).await;
        let client = LabelClient::from_settings(&settings_for(url)).unwrap();

        client.update_label(&PlayerId::from("alice"), "🥈⚔️").await.unwrap();

        let received = received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["playerId"], "alice");
        assert_eq!(received[0]["icon"], "🥈⚔️");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (url, _) = spawn_webhook(true).await;
        let client = LabelClient::from_settings(&settings_for(url)).unwrap();

        let err = client.update_label(&PlayerId::from("bob"), "🥉").await.unwrap_err();
        assert!(matches!(
            err,
            LabelError::Rejected(status) if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }
}
