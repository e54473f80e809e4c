use sqlx::PgPool;

use crate::errors::{conflict_on_unique, AppError};
use crate::models::{CreateMarket, CreateStock, Market, Stock, StockListing};
use crate::{db, validation};

pub async fn create_market(pool: &PgPool, input: CreateMarket) -> Result<Market, AppError> {
    validation::require("name", &input.name)?;
    validation::require("full_name", &input.full_name)?;
    if input.name.len() > 10 {
        return Err(AppError::Validation(
            "name: market code must be at most 10 characters".to_string(),
        ));
    }

    let market = Market {
        name: input.name,
        full_name: input.full_name,
    };
    db::stock_queries::insert_market(pool, market)
        .await
        .map_err(|e| conflict_on_unique(e, "market"))
}

pub async fn list_markets(pool: &PgPool) -> Result<Vec<Market>, AppError> {
    let markets = db::stock_queries::fetch_markets(pool).await?;
    Ok(markets)
}

pub async fn create_stock(pool: &PgPool, input: CreateStock) -> Result<Stock, AppError> {
    validation::require("symbol", &input.symbol)?;
    validation::require("company", &input.company)?;
    if input.symbol.len() > 5 {
        return Err(AppError::Validation(
            "symbol: ticker must be at most 5 characters".to_string(),
        ));
    }
    if !db::stock_queries::market_exists(pool, &input.market_name).await? {
        return Err(AppError::Validation(format!(
            "market_name: market {} does not exist",
            input.market_name
        )));
    }

    let stock = Stock {
        symbol: input.symbol.to_uppercase(),
        company: input.company,
        market_name: input.market_name,
    };
    db::stock_queries::insert_stock(pool, stock)
        .await
        .map_err(|e| conflict_on_unique(e, "stock"))
}

pub async fn listings(pool: &PgPool) -> Result<Vec<StockListing>, AppError> {
    let listings = db::stock_queries::fetch_listings(pool).await?;
    Ok(listings)
}

/// Quick-query lookup: case-insensitive substring match on symbol or
/// company name.
pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<StockListing>, AppError> {
    if query.trim().is_empty() {
        return Err(AppError::Validation("q: query must not be empty".to_string()));
    }
    let listings = db::stock_queries::search_listings(pool, query.trim()).await?;
    Ok(listings)
}
