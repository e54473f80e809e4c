use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthFa;
use crate::errors::AppError;
use crate::models::{CashReceipt, CashRequest, Share, TradeReceipt, TradeRequest};
use crate::services;
use crate::state::AppState;

/// Merged into the clients router, so paths here are relative to
/// `/api/clients`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:ni_number/trades", get(list_trades))
        .route("/:ni_number/trades/buy", post(buy_stock))
        .route("/:ni_number/trades/sell", post(sell_stock))
        .route("/:ni_number/cash/deposit", post(deposit_cash))
        .route("/:ni_number/cash/withdraw", post(withdraw_cash))
}

pub async fn buy_stock(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(ni_number): Path<String>,
    Json(data): Json<TradeRequest>,
) -> Result<Json<TradeReceipt>, AppError> {
    info!("POST /api/clients/{}/trades/buy - Buying stock", ni_number);
    let receipt = services::trading_service::buy(&state.pool, &ni_number, data)
        .await
        .map_err(|e| {
            error!("Buy failed for client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(receipt))
}

pub async fn sell_stock(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(ni_number): Path<String>,
    Json(data): Json<TradeRequest>,
) -> Result<Json<TradeReceipt>, AppError> {
    info!("POST /api/clients/{}/trades/sell - Selling stock", ni_number);
    let receipt = services::trading_service::sell(&state.pool, &ni_number, data)
        .await
        .map_err(|e| {
            error!("Sell failed for client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(receipt))
}

pub async fn list_trades(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(ni_number): Path<String>,
) -> Result<Json<Vec<Share>>, AppError> {
    info!("GET /api/clients/{}/trades - Listing trades", ni_number);
    let shares = services::trading_service::trades(&state.pool, &ni_number)
        .await
        .map_err(|e| {
            error!("Failed to list trades for client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(shares))
}

pub async fn deposit_cash(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(ni_number): Path<String>,
    Json(data): Json<CashRequest>,
) -> Result<Json<CashReceipt>, AppError> {
    info!("POST /api/clients/{}/cash/deposit - Depositing cash", ni_number);
    let receipt = services::trading_service::deposit(&state.pool, &ni_number, data.amount)
        .await
        .map_err(|e| {
            error!("Deposit failed for client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(receipt))
}

pub async fn withdraw_cash(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(ni_number): Path<String>,
    Json(data): Json<CashRequest>,
) -> Result<Json<CashReceipt>, AppError> {
    info!("POST /api/clients/{}/cash/withdraw - Withdrawing cash", ni_number);
    let receipt = services::trading_service::withdraw(&state.pool, &ni_number, data.amount)
        .await
        .map_err(|e| {
            error!("Withdrawal failed for client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(receipt))
}
