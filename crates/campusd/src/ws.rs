//! WebSocket event fan-out.
//!
//! Each connected socket gets its own subscription to the broadcast
//! channel and receives every mutation event as a JSON text frame,
//! `{"event": name, "data": payload}`. Events are sent strictly after the
//! mutation persisted (handlers broadcast only on success). Delivery is
//! best-effort: a listener that falls behind the channel buffer loses the
//! skipped events, and there is no replay for sockets that connect later.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use campusapp::events::Event;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::state::AppState;

pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let events = state.events.subscribe();
    ws.on_upgrade(move |socket| stream_events(socket, events))
}

async fn stream_events(mut socket: WebSocket, mut events: broadcast::Receiver<Event>) {
    debug!("event listener connected");

    loop {
        match events.recv().await {
            Ok(event) => {
                let frame = match serde_json::to_string(&event) {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("failed to serialize event: {e}");
                        continue;
                    }
                };
                if socket.send(Message::Text(frame.into())).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "event listener lagged, events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    debug!("event listener disconnected");
}
