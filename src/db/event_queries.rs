use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Event, MeetingNote};

const EVENT_COLUMNS: &str =
    "id, fa_ni_number, client_ni_number, start_time, end_time, event_type, title, created_at";

pub async fn insert(pool: &PgPool, event: Event) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!(
        "INSERT INTO events (id, fa_ni_number, client_ni_number, start_time, end_time,
                             event_type, title, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {}",
        EVENT_COLUMNS
    ))
    .bind(event.id)
    .bind(event.fa_ni_number)
    .bind(event.client_ni_number)
    .bind(event.start_time)
    .bind(event.end_time)
    .bind(event.event_type)
    .bind(event.title)
    .bind(event.created_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_for_fa(
    pool: &PgPool,
    fa_ni_number: &str,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!(
        "SELECT {} FROM events
         WHERE fa_ni_number = $1
           AND ($2::timestamptz IS NULL OR start_time >= $2)
           AND ($3::timestamptz IS NULL OR start_time <= $3)
         ORDER BY start_time",
        EVENT_COLUMNS
    ))
    .bind(fa_ni_number)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!("SELECT {} FROM events WHERE id = $1", EVENT_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Deletes only when the caller owns the event.
pub async fn delete_owned(
    pool: &PgPool,
    id: Uuid,
    fa_ni_number: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1 AND fa_ni_number = $2")
        .bind(id)
        .bind(fa_ni_number)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// One note per event: replaces the text if a note already exists.
pub async fn upsert_note(pool: &PgPool, note: MeetingNote) -> Result<MeetingNote, sqlx::Error> {
    sqlx::query_as::<_, MeetingNote>(
        "INSERT INTO meeting_notes (id, event_id, note, created_at)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (event_id) DO UPDATE SET note = EXCLUDED.note
         RETURNING id, event_id, note, created_at",
    )
    .bind(note.id)
    .bind(note.event_id)
    .bind(note.note)
    .bind(note.created_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_note(pool: &PgPool, event_id: Uuid) -> Result<Option<MeetingNote>, sqlx::Error> {
    sqlx::query_as::<_, MeetingNote>(
        "SELECT id, event_id, note, created_at FROM meeting_notes WHERE event_id = $1",
    )
    .bind(event_id)
    .fetch_optional(pool)
    .await
}
