use chrono::{DateTime, FixedOffset};
use entities::{blog, custom_methods::blog::BlogTagsTrait, sea_orm_active_enums::BlogStatus};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct BlogVisible {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub status: BlogStatus,
    pub views: i32,
    pub author_id: Option<Uuid>,
    pub published_at: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<blog::Model> for BlogVisible {
    fn from(value: blog::Model) -> Self {
        Self {
            tags: value.tag_list(),
            id: value.id,
            title: value.title,
            slug: value.slug,
            content: value.content,
            excerpt: value.excerpt,
            featured_image: value.featured_image,
            category: value.category,
            status: value.status,
            views: value.views,
            author_id: value.author_id,
            published_at: value.published_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct BlogListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BlogCreateRequest {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<BlogStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BlogUpdateRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    /// Outer Option is field presence; `Some(None)` clears the excerpt.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub excerpt: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub featured_image: Option<Option<String>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<BlogStatus>,
}

pub const DEFAULT_CATEGORY: &str = "General";

fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
