use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::get,
    Extension, Json, Router,
};

use easypark_domain::ParkingStats;

use crate::{
    error::AppError,
    middleware::{auth_middleware, require_admin, AuthUser},
    state::AppState,
};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(get_stats))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ParkingStats>, AppError> {
    require_admin(&user)?;

    let parking = state.parking.lock().await;
    Ok(Json(parking.admin_stats()))
}
