use sqlx::PgPool;

use crate::models::{Advisor, AdvisorProfile};

const ALL_COLUMNS: &str = "ni_number, email, first_name, middle_name, surname, dob, \
                           password_hash, is_staff, is_admin, is_active, created_at";

pub async fn insert(pool: &PgPool, advisor: Advisor) -> Result<Advisor, sqlx::Error> {
    sqlx::query_as::<_, Advisor>(&format!(
        "INSERT INTO advisors (ni_number, email, first_name, middle_name, surname, dob,
                               password_hash, is_staff, is_admin, is_active, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
         RETURNING {}",
        ALL_COLUMNS
    ))
    .bind(advisor.ni_number)
    .bind(advisor.email)
    .bind(advisor.first_name)
    .bind(advisor.middle_name)
    .bind(advisor.surname)
    .bind(advisor.dob)
    .bind(advisor.password_hash)
    .bind(advisor.is_staff)
    .bind(advisor.is_admin)
    .bind(advisor.is_active)
    .bind(advisor.created_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_by_email(pool: &PgPool, email: &str) -> Result<Option<Advisor>, sqlx::Error> {
    sqlx::query_as::<_, Advisor>(&format!(
        "SELECT {} FROM advisors WHERE email = $1",
        ALL_COLUMNS
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, ni_number: &str) -> Result<Option<Advisor>, sqlx::Error> {
    sqlx::query_as::<_, Advisor>(&format!(
        "SELECT {} FROM advisors WHERE ni_number = $1",
        ALL_COLUMNS
    ))
    .bind(ni_number)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_all_profiles(pool: &PgPool) -> Result<Vec<AdvisorProfile>, sqlx::Error> {
    sqlx::query_as::<_, AdvisorProfile>(
        "SELECT ni_number, email, first_name, middle_name, surname, dob,
                is_staff, is_admin, is_active
         FROM advisors
         ORDER BY surname, first_name",
    )
    .fetch_all(pool)
    .await
}

pub async fn exists(pool: &PgPool, ni_number: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM advisors WHERE ni_number = $1)")
        .bind(ni_number)
        .fetch_one(pool)
        .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM advisors")
        .fetch_one(pool)
        .await
}

pub async fn set_active(pool: &PgPool, ni_number: &str, active: bool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE advisors SET is_active = $1 WHERE ni_number = $2")
        .bind(active)
        .bind(ni_number)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
