//! Webhook HTTP ingress: landing page, static assets and the update receiver.
//!
//! The update receiver is mounted at `/<bot_token>` for both GET and POST,
//! and always answers `200 OK` so Telegram never retries a delivery.

use axum::{
    body::Bytes, extract::State, http::StatusCode, response::Html, routing::get, Router,
};
use tokio::sync::mpsc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::adapters::TelegramUpdateWrapper;
use crate::types::Update;

/// Landing page, embedded at compile time.
const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Shared state for the webhook routes: the sender half of the update queue.
#[derive(Clone)]
pub struct WebhookState {
    pub update_tx: mpsc::Sender<Update>,
}

/// Builds the ingress router: `GET /` landing page, `/static` assets, and
/// the update receiver mounted on `webhook_path` for both GET and POST.
/// Every request is logged through [`TraceLayer`].
pub fn webhook_router(webhook_path: &str, state: WebhookState) -> Router {
    Router::new()
        .route("/", get(landing))
        .nest_service("/static", ServeDir::new("static"))
        .route(webhook_path, get(receive_update).post(receive_update))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Receives one Telegram update callback.
///
/// Unparseable bodies and updates without message text are dropped; text
/// messages go on the queue. When the queue is full the send suspends, so
/// Telegram sees a slow `200`, never an error. The status is `200 OK` on
/// every path.
async fn receive_update(State(state): State<WebhookState>, body: Bytes) -> StatusCode {
    let wire: teloxide::types::Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            debug!(error = %e, "Dropping unparseable update payload");
            return StatusCode::OK;
        }
    };

    let Some(update) = TelegramUpdateWrapper(&wire).to_update() else {
        debug!(update_id = wire.id.0, "Dropping update without message text");
        return StatusCode::OK;
    };

    info!(
        chat_id = update.chat_id,
        message_id = update.message_id,
        "Received update"
    );
    if state.update_tx.send(update).await.is_err() {
        warn!("Update queue closed, update dropped");
    }
    StatusCode::OK
}
