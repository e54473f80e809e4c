use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::{AuthFa, StaffFa};
use crate::errors::AppError;
use crate::models::{Client, ClientDetails, CreateClient, UpdateClient};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client).get(list_clients))
        .route(
            "/:ni_number",
            get(client_details).put(update_client).delete(delete_client),
        )
}

#[derive(Debug, Deserialize)]
pub struct ClientListParams {
    /// Restrict the listing to one advisor's clients.
    pub fa: Option<String>,
}

pub async fn create_client(
    State(state): State<AppState>,
    _auth: AuthFa,
    Json(data): Json<CreateClient>,
) -> Result<Json<Client>, AppError> {
    info!("POST /api/clients - Creating new client");
    let client = services::client_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create client: {}", e);
            e
        })?;
    Ok(Json(client))
}

pub async fn list_clients(
    State(state): State<AppState>,
    _auth: AuthFa,
    Query(params): Query<ClientListParams>,
) -> Result<Json<Vec<Client>>, AppError> {
    info!("GET /api/clients - Listing clients");
    let clients = services::client_service::list(&state.pool, params.fa.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to list clients: {}", e);
            e
        })?;
    Ok(Json(clients))
}

pub async fn client_details(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(ni_number): Path<String>,
) -> Result<Json<ClientDetails>, AppError> {
    info!("GET /api/clients/{} - Fetching client details", ni_number);
    let details = services::client_service::details(&state.pool, &ni_number)
        .await
        .map_err(|e| {
            error!("Failed to fetch client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(details))
}

pub async fn update_client(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(ni_number): Path<String>,
    Json(data): Json<UpdateClient>,
) -> Result<Json<Client>, AppError> {
    info!("PUT /api/clients/{} - Updating client", ni_number);
    let client = services::client_service::update(&state.pool, &ni_number, data)
        .await
        .map_err(|e| {
            error!("Failed to update client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(client))
}

/// Deleting a client was an admin action; staff only.
pub async fn delete_client(
    State(state): State<AppState>,
    StaffFa(claims): StaffFa,
    Path(ni_number): Path<String>,
) -> Result<Json<()>, AppError> {
    info!(
        "DELETE /api/clients/{} - Deleted by staff advisor {}",
        ni_number, claims.sub
    );
    services::client_service::delete(&state.pool, &ni_number)
        .await
        .map_err(|e| {
            error!("Failed to delete client {}: {}", ni_number, e);
            e
        })?;
    Ok(Json(()))
}
