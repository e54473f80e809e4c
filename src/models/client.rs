use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::share::{Holding, Share};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub ni_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub surname: String,
    pub dob: NaiveDate,
    pub email: String,
    pub home_phone: Option<String>,
    pub mob_phone: Option<String>,
    pub cash: BigDecimal,
    pub fa_ni_number: Option<String>,
    pub twitter_username: Option<String>,
    pub facebook_username: Option<String>,
    pub linkedin_username: Option<String>,
    pub googleplus_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateClient {
    pub ni_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub surname: String,
    pub dob: NaiveDate,
    pub email: String,
    pub home_phone: Option<String>,
    pub mob_phone: Option<String>,
    /// Opening cash balance, defaults to zero.
    pub cash: Option<BigDecimal>,
    pub fa_ni_number: Option<String>,
    pub twitter_username: Option<String>,
    pub facebook_username: Option<String>,
    pub linkedin_username: Option<String>,
    pub googleplus_username: Option<String>,
}

/// Full-record edit. The NI number is the key and immutable; cash moves
/// only through the trading and cash handlers.
#[derive(Debug, Deserialize)]
pub struct UpdateClient {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub surname: String,
    pub dob: NaiveDate,
    pub email: String,
    pub home_phone: Option<String>,
    pub mob_phone: Option<String>,
    pub fa_ni_number: Option<String>,
    pub twitter_username: Option<String>,
    pub facebook_username: Option<String>,
    pub linkedin_username: Option<String>,
    pub googleplus_username: Option<String>,
}

/// Detail view: the record plus current holdings and trade history.
#[derive(Debug, Serialize)]
pub struct ClientDetails {
    pub client: Client,
    pub holdings: Vec<Holding>,
    pub trades: Vec<Share>,
}

impl Client {
    pub fn new(data: CreateClient) -> Self {
        Self {
            ni_number: data.ni_number,
            first_name: data.first_name,
            middle_name: data.middle_name,
            surname: data.surname,
            dob: data.dob,
            email: data.email,
            home_phone: data.home_phone,
            mob_phone: data.mob_phone,
            cash: data.cash.unwrap_or_else(|| BigDecimal::from(0)),
            fa_ni_number: data.fa_ni_number,
            twitter_username: data.twitter_username,
            facebook_username: data.facebook_username,
            linkedin_username: data.linkedin_username,
            googleplus_username: data.googleplus_username,
            created_at: Utc::now(),
        }
    }
}
