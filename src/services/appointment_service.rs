use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateEvent, Event, EventWithNote, MeetingNote};
use crate::{db, validation};

fn validate_window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::Validation(
            "end_time must be after start_time".to_string(),
        ));
    }
    Ok(())
}

pub async fn create(
    pool: &PgPool,
    fa_ni_number: &str,
    input: CreateEvent,
) -> Result<Event, AppError> {
    validation::require("title", &input.title)?;
    validate_window(input.start_time, input.end_time)?;
    if let Some(client) = &input.client_ni_number {
        if !db::client_queries::exists(pool, client).await? {
            return Err(AppError::Validation(format!(
                "client_ni_number: client {} does not exist",
                client
            )));
        }
    }

    let event = Event::new(fa_ni_number, input);
    let event = db::event_queries::insert(pool, event).await?;
    Ok(event)
}

pub async fn list_for(
    pool: &PgPool,
    fa_ni_number: &str,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<Vec<Event>, AppError> {
    let events = db::event_queries::fetch_for_fa(pool, fa_ni_number, from, to).await?;
    Ok(events)
}

pub async fn get(pool: &PgPool, id: Uuid) -> Result<EventWithNote, AppError> {
    let event = db::event_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;
    let note = db::event_queries::fetch_note(pool, id).await?;
    Ok(EventWithNote { event, note })
}

pub async fn delete(pool: &PgPool, id: Uuid, fa_ni_number: &str) -> Result<(), AppError> {
    let event = db::event_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;
    if event.fa_ni_number != fa_ni_number {
        return Err(AppError::Forbidden);
    }
    db::event_queries::delete_owned(pool, id, fa_ni_number).await?;
    Ok(())
}

/// Creates or replaces the event's single meeting note.
pub async fn put_note(
    pool: &PgPool,
    id: Uuid,
    fa_ni_number: &str,
    note: String,
) -> Result<MeetingNote, AppError> {
    validation::require("note", &note)?;
    let event = db::event_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;
    if event.fa_ni_number != fa_ni_number {
        return Err(AppError::Forbidden);
    }
    let note = db::event_queries::upsert_note(pool, MeetingNote::new(id, note)).await?;
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_must_end_after_start() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap();
        assert!(validate_window(start, end).is_ok());
        assert!(validate_window(end, start).is_err());
        assert!(validate_window(start, start).is_err(), "zero-length window should fail");
    }
}
