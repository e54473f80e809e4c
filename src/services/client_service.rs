use bigdecimal::BigDecimal;
use sqlx::PgPool;

use crate::errors::{conflict_on_unique, AppError};
use crate::models::{Client, ClientDetails, CreateClient, UpdateClient};
use crate::{db, validation};

async fn validate_fa_link(pool: &PgPool, fa_ni_number: Option<&str>) -> Result<(), AppError> {
    if let Some(fa) = fa_ni_number {
        if !db::advisor_queries::exists(pool, fa).await? {
            return Err(AppError::Validation(format!(
                "fa_ni_number: advisor {} does not exist",
                fa
            )));
        }
    }
    Ok(())
}

fn validate_contact_fields(
    first_name: &str,
    surname: &str,
    email: &str,
    home_phone: Option<&str>,
    mob_phone: Option<&str>,
    twitter: Option<&str>,
) -> Result<(), AppError> {
    validation::require("first_name", first_name)?;
    validation::require("surname", surname)?;
    validation::require("email", email)?;
    validation::validate_email("email", email)?;
    validation::validate_optional_phone("home_phone", home_phone)?;
    validation::validate_optional_phone("mob_phone", mob_phone)?;
    validation::validate_optional_twitter_handle("twitter_username", twitter)?;
    Ok(())
}

pub async fn create(pool: &PgPool, input: CreateClient) -> Result<Client, AppError> {
    validation::validate_ni_number("ni_number", &input.ni_number)?;
    validate_contact_fields(
        &input.first_name,
        &input.surname,
        &input.email,
        input.home_phone.as_deref(),
        input.mob_phone.as_deref(),
        input.twitter_username.as_deref(),
    )?;
    if let Some(cash) = &input.cash {
        if cash < &BigDecimal::from(0) {
            return Err(AppError::Validation(
                "cash: opening balance cannot be negative".to_string(),
            ));
        }
    }
    validate_fa_link(pool, input.fa_ni_number.as_deref()).await?;

    let client = Client::new(input);
    db::client_queries::insert(pool, client)
        .await
        .map_err(|e| conflict_on_unique(e, "client"))
}

pub async fn list(pool: &PgPool, fa_filter: Option<&str>) -> Result<Vec<Client>, AppError> {
    let clients = match fa_filter {
        Some(fa) => db::client_queries::fetch_by_fa(pool, fa).await?,
        None => db::client_queries::fetch_all(pool).await?,
    };
    Ok(clients)
}

/// The detail view: record plus current holdings and trade history.
pub async fn details(pool: &PgPool, ni_number: &str) -> Result<ClientDetails, AppError> {
    let client = db::client_queries::fetch_one(pool, ni_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", ni_number)))?;
    let holdings = db::share_queries::holdings(pool, ni_number).await?;
    let trades = db::share_queries::fetch_by_owner(pool, ni_number).await?;
    Ok(ClientDetails {
        client,
        holdings,
        trades,
    })
}

pub async fn update(
    pool: &PgPool,
    ni_number: &str,
    input: UpdateClient,
) -> Result<Client, AppError> {
    validate_contact_fields(
        &input.first_name,
        &input.surname,
        &input.email,
        input.home_phone.as_deref(),
        input.mob_phone.as_deref(),
        input.twitter_username.as_deref(),
    )?;
    validate_fa_link(pool, input.fa_ni_number.as_deref()).await?;

    db::client_queries::update(pool, ni_number, input)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client {} not found", ni_number)))
}

pub async fn delete(pool: &PgPool, ni_number: &str) -> Result<(), AppError> {
    match db::client_queries::delete(pool, ni_number).await? {
        0 => Err(AppError::NotFound(format!(
            "Client {} not found",
            ni_number
        ))),
        _ => Ok(()),
    }
}
