use sqlx::PgPool;
use tracing::{info, warn};

use crate::errors::{conflict_on_unique, AppError};
use crate::models::{Advisor, AdvisorProfile, CreateAdvisor};
use crate::{auth, db, validation};

/// User factory. Every required field is enforced before anything is
/// hashed or written; ordinary advisors are created without staff or
/// admin rights, superusers with both.
pub async fn create(
    pool: &PgPool,
    input: CreateAdvisor,
    superuser: bool,
) -> Result<AdvisorProfile, AppError> {
    validation::require("email", &input.email)?;
    validation::validate_email("email", &input.email)?;
    validation::require("first_name", &input.first_name)?;
    validation::require("surname", &input.surname)?;
    validation::validate_ni_number("ni_number", &input.ni_number)?;
    if input.password.len() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    let password_hash = auth::hash_password(&input.password)?;
    let advisor = Advisor::new(input, password_hash, superuser);
    let advisor = db::advisor_queries::insert(pool, advisor)
        .await
        .map_err(|e| conflict_on_unique(e, "advisor"))?;
    Ok(advisor.into())
}

/// Email + password check. Unknown email, wrong password and inactive
/// accounts are indistinguishable to the caller.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<Advisor, AppError> {
    let advisor = db::advisor_queries::fetch_by_email(pool, email)
        .await?
        .ok_or(AppError::Unauthorized)?;
    if !auth::verify_password(password, &advisor.password_hash)? {
        return Err(AppError::Unauthorized);
    }
    if !advisor.is_active {
        warn!("login attempt for inactive advisor {}", advisor.ni_number);
        return Err(AppError::Unauthorized);
    }
    Ok(advisor)
}

pub async fn list(pool: &PgPool) -> Result<Vec<AdvisorProfile>, AppError> {
    let advisors = db::advisor_queries::fetch_all_profiles(pool).await?;
    Ok(advisors)
}

pub async fn set_active(pool: &PgPool, ni_number: &str, active: bool) -> Result<(), AppError> {
    match db::advisor_queries::set_active(pool, ni_number, active).await? {
        0 => Err(AppError::NotFound(format!(
            "Advisor {} not found",
            ni_number
        ))),
        _ => Ok(()),
    }
}

/// First-run escape hatch: when the advisors table is empty, a superuser
/// can be seeded from BOOTSTRAP_ADMIN_* so the admin endpoints become
/// reachable without a pre-existing staff token.
pub async fn bootstrap_superuser(pool: &PgPool) -> Result<(), AppError> {
    if db::advisor_queries::count(pool).await? > 0 {
        return Ok(());
    }

    let (Ok(email), Ok(password), Ok(ni_number)) = (
        std::env::var("BOOTSTRAP_ADMIN_EMAIL"),
        std::env::var("BOOTSTRAP_ADMIN_PASSWORD"),
        std::env::var("BOOTSTRAP_ADMIN_NI_NUMBER"),
    ) else {
        warn!("no advisors exist and BOOTSTRAP_ADMIN_* is not set; admin endpoints are unreachable");
        return Ok(());
    };

    let dob = std::env::var("BOOTSTRAP_ADMIN_DOB")
        .unwrap_or_else(|_| "1990-01-01".to_string())
        .parse()
        .map_err(|_| AppError::Validation("BOOTSTRAP_ADMIN_DOB: not a valid date".to_string()))?;

    let input = CreateAdvisor {
        email,
        first_name: std::env::var("BOOTSTRAP_ADMIN_FIRST_NAME")
            .unwrap_or_else(|_| "System".to_string()),
        middle_name: None,
        surname: std::env::var("BOOTSTRAP_ADMIN_SURNAME").unwrap_or_else(|_| "Admin".to_string()),
        dob,
        ni_number,
        password,
    };
    let profile = create(pool, input, true).await?;
    info!("bootstrap superuser {} created", profile.ni_number);
    Ok(())
}
