use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    timestamp: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(root)).route("/health", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().timestamp_millis(),
    })
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the EasyPark API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": ["POST /login"],
            "malls": [
                "GET /malls",
                "GET /malls/{mall_id}",
                "GET /malls/{mall_id}/slots",
            ],
            "reservations": [
                "POST /reservations",
                "GET /reservations",
                "GET /reservations/{reservation_id}",
                "PUT /reservations/{reservation_id}/cancel",
            ],
            "admin": ["GET /admin/stats (admin only)"],
        },
    }))
}
