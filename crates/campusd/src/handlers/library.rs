use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use campusapp::model::Book;
use serde_json::Value;

use super::ok;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn books(State(state): State<Arc<AppState>>) -> Json<Vec<Book>> {
    Json(state.api.lock().await.books())
}

pub async fn borrow(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, ApiError> {
    let event = state.api.lock().await.borrow_book(id)?;
    state.broadcast(event);
    Ok(ok())
}

pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, ApiError> {
    let event = state.api.lock().await.return_book(id)?;
    state.broadcast(event);
    Ok(ok())
}
