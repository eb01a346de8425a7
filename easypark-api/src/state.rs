use std::sync::Arc;
use tokio::sync::Mutex;

use easypark_engine::ParkingService;

use crate::auth::UserDirectory;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub token_expiry_minutes: u64,
}

#[derive(Clone)]
pub struct AppState {
    /// Single writer: every create/cancel holds this lock for its whole
    /// read-modify-write of slot status, mall counters and reservations.
    pub parking: Arc<Mutex<ParkingService>>,
    pub users: Arc<UserDirectory>,
    pub auth: AuthConfig,
}
