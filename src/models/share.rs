use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

/// One recorded buy or sell. `amount` is signed: positive for buys,
/// negative for sells, so a client's holding is a plain sum.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Share {
    pub id: Uuid,
    pub owner_ni_number: String,
    pub stock_symbol: String,
    pub trade_date: NaiveDate,
    pub amount: i32,
    pub price: BigDecimal,
    pub buy: bool,
    pub created_at: DateTime<Utc>,
}

impl Share {
    pub fn from_trade(
        owner_ni_number: &str,
        stock_symbol: &str,
        trade_date: NaiveDate,
        count: i32,
        price: BigDecimal,
        side: Side,
    ) -> Self {
        let (amount, buy) = match side {
            Side::Buy => (count, true),
            Side::Sell => (-count, false),
        };
        Self {
            id: Uuid::new_v4(),
            owner_ni_number: owner_ni_number.to_string(),
            stock_symbol: stock_symbol.to_string(),
            trade_date,
            amount,
            price,
            buy,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TradeRequest {
    pub stock_symbol: String,
    pub count: i32,
    /// Per-share price.
    pub price: BigDecimal,
    /// Defaults to today.
    pub trade_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct TradeReceipt {
    pub share: Share,
    pub cash: BigDecimal,
}

#[derive(Debug, Deserialize)]
pub struct CashRequest {
    pub amount: BigDecimal,
}

#[derive(Debug, Serialize)]
pub struct CashReceipt {
    pub ni_number: String,
    pub cash: BigDecimal,
}

/// Net position in one stock, summed over all trade records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Holding {
    pub stock_symbol: String,
    pub company: String,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_records_positive_amount() {
        let share = Share::from_trade(
            "AB123456C",
            "ACME",
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            25,
            BigDecimal::from(10),
            Side::Buy,
        );
        assert_eq!(share.amount, 25);
        assert!(share.buy);
    }

    #[test]
    fn sell_records_negative_amount() {
        let share = Share::from_trade(
            "AB123456C",
            "ACME",
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            10,
            BigDecimal::from(12),
            Side::Sell,
        );
        assert_eq!(share.amount, -10);
        assert!(!share.buy);
    }
}
