use std::sync::Arc;

use axum::{extract::State, Json};
use campusapp::model::{Booking, Room};
use serde::Deserialize;
use serde_json::Value;

use super::ok;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn rooms(State(state): State<Arc<AppState>>) -> Json<Vec<Room>> {
    Json(state.api.lock().await.rooms())
}

pub async fn bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.api.lock().await.bookings())
}

#[derive(Deserialize)]
pub struct CreateBookingBody {
    #[serde(rename = "roomId")]
    room_id: Option<u32>,
    user: Option<String>,
    date: Option<String>,
    time: Option<String>,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingBody>,
) -> Result<Json<Value>, ApiError> {
    let (room_id, date, time) = match (body.room_id, body.date, body.time) {
        (Some(room_id), Some(date), Some(time)) => (room_id, date, time),
        _ => return Err(ApiError::bad_request("Missing fields")),
    };

    let event = state
        .api
        .lock()
        .await
        .create_booking(room_id, body.user, date, time)?;
    state.broadcast(event);
    Ok(ok())
}
