use sqlx::PgPool;

use crate::models::{Market, Stock, StockListing};

pub async fn insert_market(pool: &PgPool, market: Market) -> Result<Market, sqlx::Error> {
    sqlx::query_as::<_, Market>(
        "INSERT INTO markets (name, full_name) VALUES ($1, $2) RETURNING name, full_name",
    )
    .bind(market.name)
    .bind(market.full_name)
    .fetch_one(pool)
    .await
}

pub async fn fetch_markets(pool: &PgPool) -> Result<Vec<Market>, sqlx::Error> {
    sqlx::query_as::<_, Market>("SELECT name, full_name FROM markets ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn market_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM markets WHERE name = $1)")
        .bind(name)
        .fetch_one(pool)
        .await
}

pub async fn insert_stock(pool: &PgPool, stock: Stock) -> Result<Stock, sqlx::Error> {
    sqlx::query_as::<_, Stock>(
        "INSERT INTO stocks (symbol, company, market_name)
         VALUES ($1, $2, $3)
         RETURNING symbol, company, market_name",
    )
    .bind(stock.symbol)
    .bind(stock.company)
    .bind(stock.market_name)
    .fetch_one(pool)
    .await
}

pub async fn fetch_stock(pool: &PgPool, symbol: &str) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT symbol, company, market_name FROM stocks WHERE symbol = $1")
        .bind(symbol)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_listings(pool: &PgPool) -> Result<Vec<StockListing>, sqlx::Error> {
    sqlx::query_as::<_, StockListing>(
        "SELECT s.symbol, s.company, s.market_name, m.full_name AS market_full_name
         FROM stocks s
         JOIN markets m ON m.name = s.market_name
         ORDER BY s.symbol",
    )
    .fetch_all(pool)
    .await
}

pub async fn search_listings(pool: &PgPool, query: &str) -> Result<Vec<StockListing>, sqlx::Error> {
    let pattern = format!("%{}%", query.replace('%', "\\%").replace('_', "\\_"));
    sqlx::query_as::<_, StockListing>(
        "SELECT s.symbol, s.company, s.market_name, m.full_name AS market_full_name
         FROM stocks s
         JOIN markets m ON m.name = s.market_name
         WHERE s.symbol ILIKE $1 OR s.company ILIKE $1
         ORDER BY s.symbol",
    )
    .bind(pattern)
    .fetch_all(pool)
    .await
}
