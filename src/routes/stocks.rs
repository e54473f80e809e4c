use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::AuthFa;
use crate::errors::AppError;
use crate::models::StockListing;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stocks))
        .route("/search", get(search_stocks))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

pub async fn list_stocks(
    State(state): State<AppState>,
    _auth: AuthFa,
) -> Result<Json<Vec<StockListing>>, AppError> {
    info!("GET /api/stocks - Listing stock directory");
    let listings = services::stock_service::listings(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to list stocks: {}", e);
            e
        })?;
    Ok(Json(listings))
}

pub async fn search_stocks(
    State(state): State<AppState>,
    _auth: AuthFa,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<StockListing>>, AppError> {
    info!("GET /api/stocks/search - Searching for '{}'", params.q);
    let listings = services::stock_service::search(&state.pool, &params.q)
        .await
        .map_err(|e| {
            error!("Stock search failed: {}", e);
            e
        })?;
    Ok(Json(listings))
}
