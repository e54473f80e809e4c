use sqlx::{PgPool, Postgres, Transaction};

use crate::models::{Holding, Share};

const ALL_COLUMNS: &str =
    "id, owner_ni_number, stock_symbol, trade_date, amount, price, buy, created_at";

pub async fn insert(
    tx: &mut Transaction<'_, Postgres>,
    share: Share,
) -> Result<Share, sqlx::Error> {
    sqlx::query_as::<_, Share>(&format!(
        "INSERT INTO shares (id, owner_ni_number, stock_symbol, trade_date, amount, price, buy, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {}",
        ALL_COLUMNS
    ))
    .bind(share.id)
    .bind(share.owner_ni_number)
    .bind(share.stock_symbol)
    .bind(share.trade_date)
    .bind(share.amount)
    .bind(share.price)
    .bind(share.buy)
    .bind(share.created_at)
    .fetch_one(&mut **tx)
    .await
}

pub async fn fetch_by_owner(pool: &PgPool, ni_number: &str) -> Result<Vec<Share>, sqlx::Error> {
    sqlx::query_as::<_, Share>(&format!(
        "SELECT {} FROM shares WHERE owner_ni_number = $1
         ORDER BY trade_date DESC, created_at DESC",
        ALL_COLUMNS
    ))
    .bind(ni_number)
    .fetch_all(pool)
    .await
}

pub async fn holdings(pool: &PgPool, ni_number: &str) -> Result<Vec<Holding>, sqlx::Error> {
    sqlx::query_as::<_, Holding>(
        "SELECT s.stock_symbol, st.company, SUM(s.amount)::BIGINT AS amount
         FROM shares s
         JOIN stocks st ON st.symbol = s.stock_symbol
         WHERE s.owner_ni_number = $1
         GROUP BY s.stock_symbol, st.company
         HAVING SUM(s.amount) <> 0
         ORDER BY s.stock_symbol",
    )
    .bind(ni_number)
    .fetch_all(pool)
    .await
}

/// Net holding in one stock. Call with the client row already locked so
/// the sum cannot move under a concurrent sell.
pub async fn holding_in_stock(
    tx: &mut Transaction<'_, Postgres>,
    ni_number: &str,
    stock_symbol: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(amount), 0)::BIGINT
         FROM shares
         WHERE owner_ni_number = $1 AND stock_symbol = $2",
    )
    .bind(ni_number)
    .bind(stock_symbol)
    .fetch_one(&mut **tx)
    .await
}
