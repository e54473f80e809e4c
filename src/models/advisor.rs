use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Advisor row. Not serializable on purpose: the password hash must
/// never leave the service, responses use [`AdvisorProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct Advisor {
    pub ni_number: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub surname: String,
    pub dob: NaiveDate,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdvisorProfile {
    pub ni_number: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub surname: String,
    pub dob: NaiveDate,
    pub is_staff: bool,
    pub is_admin: bool,
    pub is_active: bool,
}

impl From<Advisor> for AdvisorProfile {
    fn from(a: Advisor) -> Self {
        Self {
            ni_number: a.ni_number,
            email: a.email,
            first_name: a.first_name,
            middle_name: a.middle_name,
            surname: a.surname,
            dob: a.dob,
            is_staff: a.is_staff,
            is_admin: a.is_admin,
            is_active: a.is_active,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAdvisor {
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub surname: String,
    pub dob: NaiveDate,
    pub ni_number: String,
    pub password: String,
}

impl Advisor {
    /// Ordinary advisors start active, without staff or admin rights;
    /// the superuser factory flips all three flags.
    pub fn new(data: CreateAdvisor, password_hash: String, superuser: bool) -> Self {
        Self {
            ni_number: data.ni_number,
            email: data.email,
            first_name: data.first_name,
            middle_name: data.middle_name,
            surname: data.surname,
            dob: data.dob,
            password_hash,
            is_staff: superuser,
            is_admin: superuser,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
