use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use campusapp::model::{AttendanceStats, AttendanceStatus, RosterEntry};
use serde::Deserialize;
use serde_json::Value;

use super::ok;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn students(State(state): State<Arc<AppState>>) -> Json<Vec<RosterEntry>> {
    Json(state.api.lock().await.roster())
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<AttendanceStats> {
    Json(state.api.lock().await.attendance_stats())
}

#[derive(Deserialize)]
pub struct SetAttendanceBody {
    status: Option<String>,
}

pub async fn set(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    Json(body): Json<SetAttendanceBody>,
) -> Result<Json<Value>, ApiError> {
    let status = match body.status.as_deref() {
        Some("present") => AttendanceStatus::Present,
        Some("absent") => AttendanceStatus::Absent,
        _ => return Err(ApiError::bad_request("invalid status")),
    };

    let event = state.api.lock().await.set_attendance(id, status)?;
    state.broadcast(event);
    Ok(ok())
}
