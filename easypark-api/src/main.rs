use std::net::SocketAddr;
use std::sync::Arc;

use easypark_api::{app, auth::UserDirectory, state::{AppState, AuthConfig}};
use easypark_engine::ParkingService;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easypark_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = easypark_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting EasyPark API on port {}", config.server.port);

    let parking = ParkingService::seed();
    let users = UserDirectory::seed().expect("Failed to seed user directory");

    let app_state = AppState {
        parking: Arc::new(Mutex::new(parking)),
        users: Arc::new(users),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            token_expiry_minutes: config.auth.token_expiry_minutes,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
