use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::Serialize;

use easypark_domain::{Reservation, ReservationRequest};

use crate::{
    error::AppError,
    middleware::{auth_middleware, AuthUser},
    state::AppState,
};

#[derive(Debug, Serialize)]
struct CancelResponse {
    message: String,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/reservations", post(create_reservation).get(list_reservations))
        .route("/reservations/{reservation_id}", get(get_reservation))
        .route("/reservations/{reservation_id}/cancel", put(cancel_reservation))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

async fn create_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    validate_request(&req)?;

    let mut parking = state.parking.lock().await;
    let reservation = parking.create_reservation(&req, &user.username)?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn list_reservations(State(state): State<AppState>) -> Json<Vec<Reservation>> {
    let parking = state.parking.lock().await;
    Json(parking.reservations().to_vec())
}

async fn get_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<String>,
) -> Result<Json<Reservation>, AppError> {
    let parking = state.parking.lock().await;
    parking
        .reservation(&reservation_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("Reservation not found".to_string()))
}

async fn cancel_reservation(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(reservation_id): Path<String>,
) -> Result<Json<CancelResponse>, AppError> {
    let mut parking = state.parking.lock().await;
    parking.cancel_reservation(&reservation_id, &user.username, user.role)?;

    Ok(Json(CancelResponse {
        message: "Reservation cancelled successfully".to_string(),
    }))
}

fn validate_request(req: &ReservationRequest) -> Result<(), AppError> {
    if req.mall_id.trim().is_empty()
        || req.slot_id.trim().is_empty()
        || req.user_name.trim().is_empty()
        || req.vehicle_number.trim().is_empty()
    {
        return Err(AppError::ValidationError(
            "mall_id, slot_id, user_name and vehicle_number are required".to_string(),
        ));
    }
    if req.phone.trim().len() < 10 {
        return Err(AppError::ValidationError(
            "Phone number must be at least 10 characters".to_string(),
        ));
    }
    Ok(())
}
