use bigdecimal::BigDecimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::{Client, UpdateClient};

const ALL_COLUMNS: &str = "ni_number, first_name, middle_name, surname, dob, email, \
                           home_phone, mob_phone, cash, fa_ni_number, twitter_username, \
                           facebook_username, linkedin_username, googleplus_username, created_at";

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(&format!(
        "SELECT {} FROM clients ORDER BY surname, first_name",
        ALL_COLUMNS
    ))
    .fetch_all(pool)
    .await
}

pub async fn fetch_by_fa(pool: &PgPool, fa_ni_number: &str) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(&format!(
        "SELECT {} FROM clients WHERE fa_ni_number = $1 ORDER BY surname, first_name",
        ALL_COLUMNS
    ))
    .bind(fa_ni_number)
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, ni_number: &str) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(&format!(
        "SELECT {} FROM clients WHERE ni_number = $1",
        ALL_COLUMNS
    ))
    .bind(ni_number)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, client: Client) -> Result<Client, sqlx::Error> {
    sqlx::query_as::<_, Client>(&format!(
        "INSERT INTO clients (ni_number, first_name, middle_name, surname, dob, email,
                              home_phone, mob_phone, cash, fa_ni_number, twitter_username,
                              facebook_username, linkedin_username, googleplus_username, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
         RETURNING {}",
        ALL_COLUMNS
    ))
    .bind(client.ni_number)
    .bind(client.first_name)
    .bind(client.middle_name)
    .bind(client.surname)
    .bind(client.dob)
    .bind(client.email)
    .bind(client.home_phone)
    .bind(client.mob_phone)
    .bind(client.cash)
    .bind(client.fa_ni_number)
    .bind(client.twitter_username)
    .bind(client.facebook_username)
    .bind(client.linkedin_username)
    .bind(client.googleplus_username)
    .bind(client.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    ni_number: &str,
    input: UpdateClient,
) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(&format!(
        "UPDATE clients
         SET first_name = $1, middle_name = $2, surname = $3, dob = $4, email = $5,
             home_phone = $6, mob_phone = $7, fa_ni_number = $8, twitter_username = $9,
             facebook_username = $10, linkedin_username = $11, googleplus_username = $12
         WHERE ni_number = $13
         RETURNING {}",
        ALL_COLUMNS
    ))
    .bind(input.first_name)
    .bind(input.middle_name)
    .bind(input.surname)
    .bind(input.dob)
    .bind(input.email)
    .bind(input.home_phone)
    .bind(input.mob_phone)
    .bind(input.fa_ni_number)
    .bind(input.twitter_username)
    .bind(input.facebook_username)
    .bind(input.linkedin_username)
    .bind(input.googleplus_username)
    .bind(ni_number)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, ni_number: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clients WHERE ni_number = $1")
        .bind(ni_number)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn exists(pool: &PgPool, ni_number: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clients WHERE ni_number = $1)")
        .bind(ni_number)
        .fetch_one(pool)
        .await
}

/// Locks the client row for the rest of the transaction, serializing
/// concurrent cash and trade mutations against the same client.
pub async fn fetch_cash_for_update(
    tx: &mut Transaction<'_, Postgres>,
    ni_number: &str,
) -> Result<Option<BigDecimal>, sqlx::Error> {
    sqlx::query_scalar::<_, BigDecimal>("SELECT cash FROM clients WHERE ni_number = $1 FOR UPDATE")
        .bind(ni_number)
        .fetch_optional(&mut **tx)
        .await
}

pub async fn credit_cash(
    tx: &mut Transaction<'_, Postgres>,
    ni_number: &str,
    amount: &BigDecimal,
) -> Result<BigDecimal, sqlx::Error> {
    sqlx::query_scalar::<_, BigDecimal>(
        "UPDATE clients SET cash = cash + $1 WHERE ni_number = $2 RETURNING cash",
    )
    .bind(amount)
    .bind(ni_number)
    .fetch_one(&mut **tx)
    .await
}

pub async fn debit_cash(
    tx: &mut Transaction<'_, Postgres>,
    ni_number: &str,
    amount: &BigDecimal,
) -> Result<BigDecimal, sqlx::Error> {
    sqlx::query_scalar::<_, BigDecimal>(
        "UPDATE clients SET cash = cash - $1 WHERE ni_number = $2 RETURNING cash",
    )
    .bind(amount)
    .bind(ni_number)
    .fetch_one(&mut **tx)
    .await
}
