use chrono::{DateTime, FixedOffset};
use entities::{event_registration, sea_orm_active_enums::RegistrationStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct EventRegistrationVisible {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attendees: i32,
    pub notes: Option<String>,
    pub status: RegistrationStatus,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<event_registration::Model> for EventRegistrationVisible {
    fn from(value: event_registration::Model) -> Self {
        Self {
            id: value.id,
            event_id: value.event_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            attendees: value.attendees,
            notes: value.notes,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventRegistrationCreateRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attendees: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventRegistrationStatusUpdateRequest {
    pub status: RegistrationStatus,
}
