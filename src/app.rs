use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{admin, appointments, auth, clients, health, stocks, trading};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .route("/", get(root))
        .nest("/health", health::router())
        .nest("/api/auth", auth::router())
        .nest("/api/clients", clients::router().merge(trading::router()))
        .nest("/api/appointments", appointments::router())
        .nest("/api/stocks", stocks::router())
        .nest("/api/admin", admin::router())
        .layer(cors)
        .with_state(state)
}

async fn root() -> &'static str {
    "WMS backend is alive"
}
