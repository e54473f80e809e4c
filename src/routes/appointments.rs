use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthFa;
use crate::errors::AppError;
use crate::models::{CreateEvent, Event, EventWithNote, MeetingNote, PutMeetingNote};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_appointment).get(list_appointments))
        .route("/:id", get(get_appointment).delete(delete_appointment))
        .route("/:id/note", put(put_note))
}

#[derive(Debug, Deserialize)]
pub struct AppointmentWindow {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub async fn create_appointment(
    State(state): State<AppState>,
    AuthFa(claims): AuthFa,
    Json(data): Json<CreateEvent>,
) -> Result<Json<Event>, AppError> {
    info!("POST /api/appointments - Creating appointment for {}", claims.sub);
    let event = services::appointment_service::create(&state.pool, &claims.sub, data)
        .await
        .map_err(|e| {
            error!("Failed to create appointment: {}", e);
            e
        })?;
    Ok(Json(event))
}

pub async fn list_appointments(
    State(state): State<AppState>,
    AuthFa(claims): AuthFa,
    Query(window): Query<AppointmentWindow>,
) -> Result<Json<Vec<Event>>, AppError> {
    info!("GET /api/appointments - Listing appointments for {}", claims.sub);
    let events =
        services::appointment_service::list_for(&state.pool, &claims.sub, window.from, window.to)
            .await
            .map_err(|e| {
                error!("Failed to list appointments: {}", e);
                e
            })?;
    Ok(Json(events))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    _auth: AuthFa,
    Path(id): Path<Uuid>,
) -> Result<Json<EventWithNote>, AppError> {
    info!("GET /api/appointments/{} - Fetching appointment", id);
    let event = services::appointment_service::get(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch appointment {}: {}", id, e);
            e
        })?;
    Ok(Json(event))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    AuthFa(claims): AuthFa,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, AppError> {
    info!("DELETE /api/appointments/{} - Deleting appointment", id);
    services::appointment_service::delete(&state.pool, id, &claims.sub)
        .await
        .map_err(|e| {
            error!("Failed to delete appointment {}: {}", id, e);
            e
        })?;
    Ok(Json(()))
}

pub async fn put_note(
    State(state): State<AppState>,
    AuthFa(claims): AuthFa,
    Path(id): Path<Uuid>,
    Json(data): Json<PutMeetingNote>,
) -> Result<Json<MeetingNote>, AppError> {
    info!("PUT /api/appointments/{}/note - Writing meeting note", id);
    let note = services::appointment_service::put_note(&state.pool, id, &claims.sub, data.note)
        .await
        .map_err(|e| {
            error!("Failed to write note for appointment {}: {}", id, e);
            e
        })?;
    Ok(Json(note))
}
