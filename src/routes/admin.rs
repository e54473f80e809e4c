use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::StaffFa;
use crate::errors::AppError;
use crate::models::{AdvisorProfile, CreateAdvisor, CreateMarket, CreateStock, Market, Stock};
use crate::services;
use crate::state::AppState;

/// Back-office administration: advisor accounts and the market/stock
/// reference data. Staff only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advisors", post(create_advisor).get(list_advisors))
        .route("/advisors/superuser", post(create_superuser))
        .route("/advisors/:ni_number/active", put(set_advisor_active))
        .route("/markets", post(create_market).get(list_markets))
        .route("/stocks", post(create_stock))
}

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

pub async fn create_advisor(
    State(state): State<AppState>,
    StaffFa(claims): StaffFa,
    Json(data): Json<CreateAdvisor>,
) -> Result<Json<AdvisorProfile>, AppError> {
    info!("POST /api/admin/advisors - Creating advisor (by {})", claims.sub);
    let advisor = services::advisor_service::create(&state.pool, data, false)
        .await
        .map_err(|e| {
            error!("Failed to create advisor: {}", e);
            e
        })?;
    Ok(Json(advisor))
}

pub async fn create_superuser(
    State(state): State<AppState>,
    StaffFa(claims): StaffFa,
    Json(data): Json<CreateAdvisor>,
) -> Result<Json<AdvisorProfile>, AppError> {
    info!(
        "POST /api/admin/advisors/superuser - Creating superuser (by {})",
        claims.sub
    );
    let advisor = services::advisor_service::create(&state.pool, data, true)
        .await
        .map_err(|e| {
            error!("Failed to create superuser: {}", e);
            e
        })?;
    Ok(Json(advisor))
}

pub async fn list_advisors(
    State(state): State<AppState>,
    _staff: StaffFa,
) -> Result<Json<Vec<AdvisorProfile>>, AppError> {
    info!("GET /api/admin/advisors - Listing advisors");
    let advisors = services::advisor_service::list(&state.pool).await.map_err(|e| {
        error!("Failed to list advisors: {}", e);
        e
    })?;
    Ok(Json(advisors))
}

pub async fn set_advisor_active(
    State(state): State<AppState>,
    StaffFa(claims): StaffFa,
    Path(ni_number): Path<String>,
    Json(data): Json<SetActiveRequest>,
) -> Result<Json<()>, AppError> {
    info!(
        "PUT /api/admin/advisors/{}/active - Setting active={} (by {})",
        ni_number, data.active, claims.sub
    );
    services::advisor_service::set_active(&state.pool, &ni_number, data.active)
        .await
        .map_err(|e| {
            error!("Failed to update advisor {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(()))
}

pub async fn create_market(
    State(state): State<AppState>,
    _staff: StaffFa,
    Json(data): Json<CreateMarket>,
) -> Result<Json<Market>, AppError> {
    info!("POST /api/admin/markets - Creating market");
    let market = services::stock_service::create_market(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create market: {}", e);
            e
        })?;
    Ok(Json(market))
}

pub async fn list_markets(
    State(state): State<AppState>,
    _staff: StaffFa,
) -> Result<Json<Vec<Market>>, AppError> {
    info!("GET /api/admin/markets - Listing markets");
    let markets = services::stock_service::list_markets(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to list markets: {}", e);
            e
        })?;
    Ok(Json(markets))
}

pub async fn create_stock(
    State(state): State<AppState>,
    _staff: StaffFa,
    Json(data): Json<CreateStock>,
) -> Result<Json<Stock>, AppError> {
    info!("POST /api/admin/stocks - Registering stock");
    let stock = services::stock_service::create_stock(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to register stock: {}", e);
            e
        })?;
    Ok(Json(stock))
}
