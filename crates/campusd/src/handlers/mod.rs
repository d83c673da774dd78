//! HTTP request handlers, one submodule per subsystem.
//!
//! Handlers stay thin: parse the request, take the store lock, call the
//! facade, broadcast the returned event, answer `{"ok": true}`. Field
//! validation that the portal reports with specific messages (`invalid
//! status`, `itemId required`, `Missing fields`) happens here, before the
//! lock is taken; everything else is the rules layer's refusal mapped by
//! [`ApiError`](crate::error::ApiError).

pub mod attendance;
pub mod booking;
pub mod cafeteria;
pub mod library;
pub mod security;

use serde_json::{json, Value};

/// The portal's standard mutation response.
pub(crate) fn ok() -> axum::Json<Value> {
    axum::Json(json!({ "ok": true }))
}
