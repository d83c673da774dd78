use std::sync::Arc;

use axum::{extract::State, Json};
use campusapp::model::SecurityAlert;
use serde::Deserialize;
use serde_json::Value;

use super::ok;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn alerts(State(state): State<Arc<AppState>>) -> Json<Vec<SecurityAlert>> {
    Json(state.api.lock().await.alerts())
}

#[derive(Deserialize)]
pub struct AddAlertBody {
    #[serde(rename = "type")]
    kind: String,
    location: String,
    status: Option<String>,
}

pub async fn add_alert(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddAlertBody>,
) -> Result<Json<Value>, ApiError> {
    let event = state
        .api
        .lock()
        .await
        .add_alert(body.kind, body.location, body.status)?;
    state.broadcast(event);
    Ok(ok())
}

pub async fn emergency(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let event = state.api.lock().await.trigger_emergency()?;
    state.broadcast(event);
    Ok(ok())
}
