use chrono::{DateTime, FixedOffset, NaiveTime};
use db_adapters::service_schedule_adapter::ServiceScheduleParams;
use entities::service_schedule;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{require_not_blank, UseCaseError};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ServiceScheduleVisible {
    pub id: Uuid,
    pub title: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub location: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<service_schedule::Model> for ServiceScheduleVisible {
    fn from(value: service_schedule::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            day_of_week: value.day_of_week,
            start_time: value.start_time,
            end_time: value.end_time,
            location: value.location,
            description: value.description,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceScheduleRequest {
    pub title: String,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub location: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<ServiceScheduleRequest> for ServiceScheduleParams {
    type Error = UseCaseError;

    fn try_from(value: ServiceScheduleRequest) -> Result<Self, Self::Error> {
        require_not_blank(&value.title, "Title")?;
        require_not_blank(&value.location, "Location")?;
        if !(0..=6).contains(&value.day_of_week) {
            return Err(UseCaseError::BadRequest(
                "day_of_week must be between 0 (Sunday) and 6 (Saturday).".to_string(),
            ));
        }
        if let Some(end_time) = value.end_time {
            if end_time <= value.start_time {
                return Err(UseCaseError::BadRequest(
                    "end_time must be after start_time.".to_string(),
                ));
            }
        }

        Ok(ServiceScheduleParams {
            title: value.title.trim().to_string(),
            day_of_week: value.day_of_week,
            start_time: value.start_time,
            end_time: value.end_time,
            location: value.location.trim().to_string(),
            description: value.description,
            is_active: value.is_active.unwrap_or(true),
        })
    }
}
