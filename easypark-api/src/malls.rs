use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use easypark_domain::{Mall, ParkingSlot, SlotStatus, TimeWindow};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
struct AvailabilityResponse {
    available: bool,
    conflicts: Vec<String>,
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/malls", get(list_malls))
        .route("/malls/{mall_id}", get(get_mall))
        .route("/malls/{mall_id}/slots", get(list_slots))
        .route("/malls/{mall_id}/slots/{slot_id}", get(get_slot))
        .route(
            "/malls/{mall_id}/slots/{slot_id}/check-availability",
            post(check_availability),
        )
}

async fn list_malls(State(state): State<AppState>) -> Json<Vec<Mall>> {
    let parking = state.parking.lock().await;
    Json(parking.malls().to_vec())
}

async fn get_mall(
    State(state): State<AppState>,
    Path(mall_id): Path<String>,
) -> Result<Json<Mall>, AppError> {
    let parking = state.parking.lock().await;
    parking
        .mall(&mall_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Mall not found".to_string()))
}

async fn list_slots(
    State(state): State<AppState>,
    Path(mall_id): Path<String>,
) -> Result<Json<Vec<ParkingSlot>>, AppError> {
    let parking = state.parking.lock().await;
    let slots = parking
        .slots(&mall_id)
        .ok_or_else(|| AppError::NotFoundError("Mall not found".to_string()))?;
    Ok(Json(slots.to_vec()))
}

async fn get_slot(
    State(state): State<AppState>,
    Path((mall_id, slot_id)): Path<(String, String)>,
) -> Result<Json<ParkingSlot>, AppError> {
    let parking = state.parking.lock().await;
    parking
        .slot(&mall_id, &slot_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Parking slot not found".to_string()))
}

async fn check_availability(
    State(state): State<AppState>,
    Path((mall_id, slot_id)): Path<(String, String)>,
    Json(window): Json<TimeWindow>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let parking = state.parking.lock().await;

    let slot = parking
        .slot(&mall_id, &slot_id)
        .ok_or_else(|| AppError::NotFoundError("Parking slot not found".to_string()))?;

    // Coarse gate first: a slot that is not `available` never reaches the
    // time-window check.
    if slot.status != SlotStatus::Available {
        return Ok(Json(AvailabilityResponse {
            available: false,
            conflicts: Vec::new(),
            message: "Slot is occupied or under maintenance".to_string(),
        }));
    }

    let (available, conflicts) =
        parking.check_availability(&slot_id, &window.start_time, &window.end_time)?;

    let message = if available {
        "Slot is available"
    } else {
        "Slot is not available for the requested time"
    };

    Ok(Json(AvailabilityResponse {
        available,
        conflicts,
        message: message.to_string(),
    }))
}
