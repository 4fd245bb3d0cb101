use chrono::{DateTime, FixedOffset, NaiveDate};
use db_adapters::sermon_adapter::SermonParams;
use entities::sermon;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{require_not_blank, UseCaseError};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SermonVisible {
    pub id: Uuid,
    pub title: String,
    pub speaker: String,
    pub preached_on: NaiveDate,
    pub scripture: Option<String>,
    pub description: Option<String>,
    pub series: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<sermon::Model> for SermonVisible {
    fn from(value: sermon::Model) -> Self {
        Self {
            id: value.id,
            title: value.title,
            speaker: value.speaker,
            preached_on: value.preached_on,
            scripture: value.scripture,
            description: value.description,
            series: value.series,
            video_url: value.video_url,
            audio_url: value.audio_url,
            thumbnail_url: value.thumbnail_url,
            is_published: value.is_published,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SermonListQuery {
    pub series: Option<String>,
    pub speaker: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SermonRequest {
    pub title: String,
    pub speaker: String,
    pub preached_on: NaiveDate,
    pub scripture: Option<String>,
    pub description: Option<String>,
    pub series: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_published: Option<bool>,
}

impl TryFrom<SermonRequest> for SermonParams {
    type Error = UseCaseError;

    fn try_from(value: SermonRequest) -> Result<Self, Self::Error> {
        require_not_blank(&value.title, "Title")?;
        require_not_blank(&value.speaker, "Speaker")?;
        Ok(SermonParams {
            title: value.title.trim().to_string(),
            speaker: value.speaker.trim().to_string(),
            preached_on: value.preached_on,
            scripture: value.scripture,
            description: value.description,
            series: value.series.filter(|s| !s.trim().is_empty()),
            video_url: value.video_url,
            audio_url: value.audio_url,
            thumbnail_url: value.thumbnail_url,
            is_published: value.is_published.unwrap_or(true),
        })
    }
}
