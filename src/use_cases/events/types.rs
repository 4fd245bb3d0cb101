use chrono::{DateTime, FixedOffset};
use db_adapters::event_adapter::EventParams;
use entities::event;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{require_not_blank, UseCaseError};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct EventVisible {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub start_at: DateTime<FixedOffset>,
    pub end_at: Option<DateTime<FixedOffset>>,
    pub image_url: Option<String>,
    pub max_attendees: Option<i32>,
    pub registration_required: bool,
    pub is_published: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<event::Model> for EventVisible {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            category: value.category,
            start_at: value.start_at,
            end_at: value.end_at,
            image_url: value.image_url,
            max_attendees: value.max_attendees,
            registration_required: value.registration_required,
            is_published: value.is_published,
            created_by: value.created_by,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct EventWithRegistrationCount {
    #[serde(flatten)]
    pub event: EventVisible,
    pub registration_count: i64,
    pub spots_remaining: Option<i64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EventListQuery {
    pub upcoming: Option<bool>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Option<String>,
    pub start_at: DateTime<FixedOffset>,
    pub end_at: Option<DateTime<FixedOffset>>,
    pub image_url: Option<String>,
    pub max_attendees: Option<i32>,
    pub registration_required: Option<bool>,
    pub is_published: Option<bool>,
}

pub const DEFAULT_CATEGORY: &str = "General";

impl TryFrom<EventRequest> for EventParams {
    type Error = UseCaseError;

    fn try_from(value: EventRequest) -> Result<Self, Self::Error> {
        require_not_blank(&value.title, "Title")?;
        require_not_blank(&value.description, "Description")?;
        require_not_blank(&value.location, "Location")?;
        if let Some(end_at) = value.end_at {
            if end_at < value.start_at {
                return Err(UseCaseError::BadRequest(
                    "end_at must not be before start_at.".to_string(),
                ));
            }
        }
        if let Some(max_attendees) = value.max_attendees {
            if max_attendees < 1 {
                return Err(UseCaseError::BadRequest(
                    "max_attendees must be at least 1.".to_string(),
                ));
            }
        }

        Ok(EventParams {
            title: value.title.trim().to_string(),
            description: value.description,
            location: value.location.trim().to_string(),
            category: value
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(DEFAULT_CATEGORY.to_string()),
            start_at: value.start_at,
            end_at: value.end_at,
            image_url: value.image_url,
            max_attendees: value.max_attendees,
            registration_required: value
                .registration_required
                .unwrap_or(value.max_attendees.is_some()),
            is_published: value.is_published.unwrap_or(true),
        })
    }
}
