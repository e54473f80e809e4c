use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An appointment between an advisor and, optionally, a client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub fa_ni_number: String,
    pub client_ni_number: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub event_type: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub client_ni_number: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub event_type: Option<String>,
    pub title: String,
}

impl Event {
    pub fn new(fa_ni_number: &str, data: CreateEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            fa_ni_number: fa_ni_number.to_string(),
            client_ni_number: data.client_ni_number,
            start_time: data.start_time,
            end_time: data.end_time,
            event_type: data.event_type.unwrap_or_else(|| "meeting".to_string()),
            title: data.title,
            created_at: Utc::now(),
        }
    }
}

/// One note per event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MeetingNote {
    pub id: Uuid,
    pub event_id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl MeetingNote {
    pub fn new(event_id: Uuid, note: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            note,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PutMeetingNote {
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct EventWithNote {
    pub event: Event,
    pub note: Option<MeetingNote>,
}
