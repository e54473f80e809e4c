use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Market {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateMarket {
    pub name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub symbol: String,
    pub company: String,
    pub market_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateStock {
    pub symbol: String,
    pub company: String,
    pub market_name: String,
}

/// Directory row: stock joined with its market's full name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockListing {
    pub symbol: String,
    pub company: String,
    pub market_name: String,
    pub market_full_name: String,
}
