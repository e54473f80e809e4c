use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use wms_backend::auth::AuthConfig;
use wms_backend::logging::{init_logging, LoggingConfig};
use wms_backend::services::advisor_service;
use wms_backend::state::AppState;
use wms_backend::{app, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())?;

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let advisors = db::advisor_queries::count(&pool).await?;
    tracing::info!("📊 {} advisor account(s) on record", advisors);
    advisor_service::bootstrap_superuser(&pool).await?;

    let auth = AuthConfig::from_env()?;
    let state = AppState {
        pool,
        auth: Arc::new(auth),
    };
    let app = app::create_app(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 WMS backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
