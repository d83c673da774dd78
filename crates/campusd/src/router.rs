use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{attendance, booking, cafeteria, library, security};
use crate::state::AppState;
use crate::ws;

pub fn app(state: Arc<AppState>) -> Router {
    // The portal's frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/students", get(attendance::students))
        .route("/api/attendance/stats", get(attendance::stats))
        .route("/api/attendance/{id}", post(attendance::set))
        .route("/api/books", get(library::books))
        .route("/api/books/{id}/borrow", post(library::borrow))
        .route("/api/books/{id}/return", post(library::return_book))
        .route("/api/menu", get(cafeteria::menu))
        .route("/api/cafeteria/insights", get(cafeteria::insights))
        .route("/api/orders", get(cafeteria::orders).post(cafeteria::create_order))
        .route("/api/security/alerts", get(security::alerts).post(security::add_alert))
        .route("/api/security/emergency", post(security::emergency))
        .route("/api/rooms", get(booking::rooms))
        .route("/api/bookings", get(booking::bookings).post(booking::create_booking))
        .route("/ws", get(ws::handler))
        .layer(cors)
        .with_state(state)
}
