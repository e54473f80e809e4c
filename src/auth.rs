use anyhow::Context;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Advisor;
use crate::state::AppState;

/// Signing key material plus token lifetime, shared through `AppState`.
#[derive(Clone)]
pub struct AuthConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
    pub ttl_minutes: i64,
}

impl AuthConfig {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_minutes,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let ttl_minutes = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(480);
        Ok(Self::new(&secret, ttl_minutes))
    }
}

/// Bearer-token claims for an authenticated advisor. `sub` is the
/// advisor's NI number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub staff: bool,
    pub admin: bool,
    pub iat: i64,
    pub exp: i64,
}

pub fn mint_token(auth: &AuthConfig, advisor: &Advisor) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: advisor.ni_number.clone(),
        email: advisor.email.clone(),
        staff: advisor.is_staff,
        admin: advisor.is_admin,
        iat: now.timestamp(),
        exp: (now + Duration::minutes(auth.ttl_minutes)).timestamp(),
    };
    encode(&Header::default(), &claims, &auth.encoding)
        .map_err(|e| AppError::Internal(format!("failed to sign token: {}", e)))
}

pub fn verify_token(auth: &AuthConfig, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(token, &auth.decoding, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Extractor: any authenticated advisor.
pub struct AuthFa(pub Claims);

/// Extractor: authenticated advisor with the staff flag.
pub struct StaffFa(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthFa {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;
        let claims = verify_token(&state.auth, token)?;
        Ok(AuthFa(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for StaffFa {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let AuthFa(claims) = AuthFa::from_request_parts(parts, state).await?;
        if !claims.staff {
            return Err(AppError::Forbidden);
        }
        Ok(StaffFa(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn advisor() -> Advisor {
        Advisor {
            ni_number: "AB123456C".to_string(),
            email: "fa@example.com".to_string(),
            first_name: "Jane".to_string(),
            middle_name: None,
            surname: "Doe".to_string(),
            dob: NaiveDate::from_ymd_opt(1985, 6, 1).expect("valid date"),
            password_hash: String::new(),
            is_staff: false,
            is_admin: false,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let auth = AuthConfig::new("test-secret", 60);
        let token = mint_token(&auth, &advisor()).expect("token should mint");
        let claims = verify_token(&auth, &token).expect("token should verify");
        assert_eq!(claims.sub, "AB123456C");
        assert_eq!(claims.email, "fa@example.com");
        assert!(!claims.staff);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Negative TTL puts exp in the past, beyond the default leeway.
        let auth = AuthConfig::new("test-secret", -10);
        let token = mint_token(&auth, &advisor()).expect("token should mint");
        assert!(verify_token(&auth, &token).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let auth = AuthConfig::new("test-secret", 60);
        let other = AuthConfig::new("other-secret", 60);
        let token = mint_token(&other, &advisor()).expect("token should mint");
        assert!(verify_token(&auth, &token).is_err());
    }

    #[test]
    fn password_hash_verifies() {
        let hash = hash_password("s3cret-pass").expect("hash should succeed");
        assert!(verify_password("s3cret-pass", &hash).expect("verify should run"));
        assert!(!verify_password("wrong-pass", &hash).expect("verify should run"));
    }
}
