use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::auth::{mint_token, AuthFa};
use crate::errors::AppError;
use crate::models::AdvisorProfile;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub advisor: AdvisorProfile,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub ni_number: String,
    pub email: String,
    pub is_staff: bool,
    pub is_admin: bool,
}

pub async fn login(
    State(state): State<AppState>,
    Json(data): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    info!("POST /api/auth/login - Login attempt");
    let advisor = services::advisor_service::authenticate(&state.pool, &data.email, &data.password)
        .await
        .map_err(|e| {
            error!("Login failed: {}", e);
            e
        })?;
    let token = mint_token(&state.auth, &advisor)?;
    Ok(Json(LoginResponse {
        token,
        advisor: advisor.into(),
    }))
}

/// Tokens are stateless, so logout is an acknowledgement; the caller
/// discards the token.
pub async fn logout(AuthFa(claims): AuthFa) -> Json<Value> {
    info!("POST /api/auth/logout - Advisor {} logged out", claims.sub);
    Json(json!({ "status": "logged out" }))
}

pub async fn me(AuthFa(claims): AuthFa) -> Json<MeResponse> {
    info!("GET /api/auth/me - Advisor {}", claims.sub);
    Json(MeResponse {
        ni_number: claims.sub,
        email: claims.email,
        is_staff: claims.staff,
        is_admin: claims.admin,
    })
}
