use bigdecimal::BigDecimal;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::db;
use crate::errors::AppError;
use crate::models::{CashReceipt, Holding, Share, Side, TradeReceipt, TradeRequest};

/// Cash and holdings move only through this module. Every mutation
/// locks the client row first, so a concurrent request cannot overdraw
/// cash or oversell a holding.

fn validate_trade(input: &TradeRequest) -> Result<(), AppError> {
    if input.stock_symbol.trim().is_empty() {
        return Err(AppError::Validation("stock_symbol is required".to_string()));
    }
    if input.count <= 0 {
        return Err(AppError::Validation("count must be > 0".to_string()));
    }
    if input.price <= BigDecimal::from(0) {
        return Err(AppError::Validation("price must be > 0".to_string()));
    }
    Ok(())
}

fn validate_cash_amount(amount: &BigDecimal) -> Result<(), AppError> {
    if amount <= &BigDecimal::from(0) {
        return Err(AppError::Validation("amount must be > 0".to_string()));
    }
    Ok(())
}

pub async fn buy(
    pool: &PgPool,
    ni_number: &str,
    input: TradeRequest,
) -> Result<TradeReceipt, AppError> {
    validate_trade(&input)?;
    let stock = db::stock_queries::fetch_stock(pool, &input.stock_symbol)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stock {} not found", input.stock_symbol)))?;

    let mut tx = pool.begin().await?;
    let cash = db::client_queries::fetch_cash_for_update(&mut tx, ni_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", ni_number)))?;

    let cost = &input.price * BigDecimal::from(input.count);
    if cash < cost {
        return Err(AppError::Validation(format!(
            "insufficient cash: balance is {}, cost is {}",
            cash, cost
        )));
    }

    let trade_date = input.trade_date.unwrap_or_else(|| Utc::now().date_naive());
    let share = Share::from_trade(
        ni_number,
        &stock.symbol,
        trade_date,
        input.count,
        input.price,
        Side::Buy,
    );
    let share = db::share_queries::insert(&mut tx, share).await?;
    let cash = db::client_queries::debit_cash(&mut tx, ni_number, &cost).await?;
    tx.commit().await?;

    info!(
        "client {} bought {} x {} for {}",
        ni_number, input.count, stock.symbol, cost
    );
    Ok(TradeReceipt { share, cash })
}

pub async fn sell(
    pool: &PgPool,
    ni_number: &str,
    input: TradeRequest,
) -> Result<TradeReceipt, AppError> {
    validate_trade(&input)?;
    let stock = db::stock_queries::fetch_stock(pool, &input.stock_symbol)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stock {} not found", input.stock_symbol)))?;

    let mut tx = pool.begin().await?;
    db::client_queries::fetch_cash_for_update(&mut tx, ni_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", ni_number)))?;

    let held = db::share_queries::holding_in_stock(&mut tx, ni_number, &stock.symbol).await?;
    if held < input.count as i64 {
        return Err(AppError::Validation(format!(
            "insufficient holding: {} shares of {} held, tried to sell {}",
            held, stock.symbol, input.count
        )));
    }

    let proceeds = &input.price * BigDecimal::from(input.count);
    let trade_date = input.trade_date.unwrap_or_else(|| Utc::now().date_naive());
    let share = Share::from_trade(
        ni_number,
        &stock.symbol,
        trade_date,
        input.count,
        input.price,
        Side::Sell,
    );
    let share = db::share_queries::insert(&mut tx, share).await?;
    let cash = db::client_queries::credit_cash(&mut tx, ni_number, &proceeds).await?;
    tx.commit().await?;

    info!(
        "client {} sold {} x {} for {}",
        ni_number, input.count, stock.symbol, proceeds
    );
    Ok(TradeReceipt { share, cash })
}

pub async fn deposit(
    pool: &PgPool,
    ni_number: &str,
    amount: BigDecimal,
) -> Result<CashReceipt, AppError> {
    validate_cash_amount(&amount)?;

    let mut tx = pool.begin().await?;
    db::client_queries::fetch_cash_for_update(&mut tx, ni_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", ni_number)))?;
    let cash = db::client_queries::credit_cash(&mut tx, ni_number, &amount).await?;
    tx.commit().await?;

    Ok(CashReceipt {
        ni_number: ni_number.to_string(),
        cash,
    })
}

pub async fn withdraw(
    pool: &PgPool,
    ni_number: &str,
    amount: BigDecimal,
) -> Result<CashReceipt, AppError> {
    validate_cash_amount(&amount)?;

    let mut tx = pool.begin().await?;
    let cash = db::client_queries::fetch_cash_for_update(&mut tx, ni_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", ni_number)))?;
    if cash < amount {
        return Err(AppError::Validation(format!(
            "insufficient cash: balance is {}, withdrawal is {}",
            cash, amount
        )));
    }
    let cash = db::client_queries::debit_cash(&mut tx, ni_number, &amount).await?;
    tx.commit().await?;

    Ok(CashReceipt {
        ni_number: ni_number.to_string(),
        cash,
    })
}

pub async fn trades(pool: &PgPool, ni_number: &str) -> Result<Vec<Share>, AppError> {
    if !db::client_queries::exists(pool, ni_number).await? {
        return Err(AppError::NotFound(format!(
            "Client {} not found",
            ni_number
        )));
    }
    let shares = db::share_queries::fetch_by_owner(pool, ni_number).await?;
    Ok(shares)
}

pub async fn holdings(pool: &PgPool, ni_number: &str) -> Result<Vec<Holding>, AppError> {
    if !db::client_queries::exists(pool, ni_number).await? {
        return Err(AppError::NotFound(format!(
            "Client {} not found",
            ni_number
        )));
    }
    let holdings = db::share_queries::holdings(pool, ni_number).await?;
    Ok(holdings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trade(count: i32, price: i64) -> TradeRequest {
        TradeRequest {
            stock_symbol: "ACME".to_string(),
            count,
            price: BigDecimal::from(price),
            trade_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        }
    }

    #[test]
    fn rejects_non_positive_count() {
        assert!(validate_trade(&trade(0, 10)).is_err());
        assert!(validate_trade(&trade(-5, 10)).is_err());
        assert!(validate_trade(&trade(5, 10)).is_ok());
    }

    #[test]
    fn rejects_non_positive_price() {
        assert!(validate_trade(&trade(5, 0)).is_err());
        assert!(validate_trade(&trade(5, -1)).is_err());
    }

    #[test]
    fn rejects_blank_symbol() {
        let mut t = trade(5, 10);
        t.stock_symbol = "  ".to_string();
        assert!(validate_trade(&t).is_err());
    }

    #[test]
    fn rejects_non_positive_cash_amounts() {
        assert!(validate_cash_amount(&BigDecimal::from(0)).is_err());
        assert!(validate_cash_amount(&BigDecimal::from(-20)).is_err());
        assert!(validate_cash_amount(&BigDecimal::from(100)).is_ok());
    }
}
