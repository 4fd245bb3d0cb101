use chrono::{DateTime, FixedOffset};
use entities::{prayer_request, sea_orm_active_enums::PrayerRequestStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PrayerRequestVisible {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub request: String,
    pub is_anonymous: bool,
    pub is_public: bool,
    pub status: PrayerRequestStatus,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<prayer_request::Model> for PrayerRequestVisible {
    fn from(value: prayer_request::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            request: value.request,
            is_anonymous: value.is_anonymous,
            is_public: value.is_public,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// What the public prayer wall shows: never an email, and no name for anonymous requests.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PublicPrayerRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub request: String,
    pub status: PrayerRequestStatus,
    pub created_at: DateTime<FixedOffset>,
}

impl From<prayer_request::Model> for PublicPrayerRequest {
    fn from(value: prayer_request::Model) -> Self {
        Self {
            id: value.id,
            name: match value.is_anonymous {
                true => None,
                false => value.name,
            },
            request: value.request,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PrayerRequestCreateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub request: String,
    pub is_anonymous: Option<bool>,
    pub is_public: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PrayerRequestUpdateRequest {
    pub status: Option<PrayerRequestStatus>,
    pub is_public: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PrayerRequestListQuery {
    pub status: Option<PrayerRequestStatus>,
}

pub const MAX_REQUEST_LENGTH: usize = 2000;
