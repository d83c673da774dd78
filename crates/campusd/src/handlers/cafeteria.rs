use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use campusapp::model::{MenuItem, Order};
use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Value};

use super::ok;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn menu(State(state): State<Arc<AppState>>) -> Json<Vec<MenuItem>> {
    Json(state.api.lock().await.menu())
}

#[derive(Deserialize)]
pub struct CreateOrderBody {
    #[serde(rename = "itemId")]
    item_id: Option<u32>,
    user: Option<String>,
}

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateOrderBody>,
) -> Result<Json<Value>, ApiError> {
    let item_id = body
        .item_id
        .ok_or_else(|| ApiError::bad_request("itemId required"))?;

    let event = state.api.lock().await.create_order(item_id, body.user)?;
    state.broadcast(event);
    Ok(ok())
}

#[derive(Deserialize)]
pub struct OrdersQuery {
    user: Option<String>,
}

pub async fn orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrdersQuery>,
) -> Json<Vec<Order>> {
    let user = query.user.unwrap_or_else(|| "guest".to_string());
    Json(state.api.lock().await.orders_for_user(&user))
}

/// Synthetic "live" demand figures for the cafeteria dashboard. Not
/// derived from stored data; the noise just keeps the widget moving.
pub async fn insights() -> Json<Value> {
    let mut rng = rand::thread_rng();

    let base_footfall = 300u32;
    let expected_footfall = base_footfall + rng.gen_range(0..50);
    // 10% prep buffer on top of expected footfall
    let recommended_prep = (f64::from(expected_footfall) * 1.1).ceil() as u32;

    let trends: Vec<f64> = [60.0, 80.0, 45.0, 90.0, 75.0, 50.0, 65.0]
        .iter()
        .map(|v: &f64| (v + rng.gen_range(-10.0..10.0)).clamp(0.0, 100.0))
        .collect();

    Json(json!({
        "trends": trends,
        "waste": {
            "reduction": 12,
            "saved": 85,
            "message": "Based on yesterday's leftovers, we suggest reducing rice preparation by 5kg today."
        },
        "prediction": {
            "nextMeal": "Lunch",
            "expectedFootfall": expected_footfall,
            "recommendedPrep": recommended_prep,
            "confidence": 85 + rng.gen_range(0..10),
            "popularItem": "Veg Thali Deluxe"
        }
    }))
}
