use std::future::Future;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait, Order,
    QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::event::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct EventAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> EventAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait EventFilter {
    fn filter_eq_is_published(self, is_published: bool) -> Self;
    fn filter_start_at_gte(self, from: DateTime<FixedOffset>) -> Self;
    fn filter_eq_category(self, category: &str) -> Self;
}

impl EventFilter for EventAdapter<'_> {
    fn filter_eq_is_published(mut self, is_published: bool) -> Self {
        self.query = self.query.filter(Column::IsPublished.eq(is_published));
        self
    }

    fn filter_start_at_gte(mut self, from: DateTime<FixedOffset>) -> Self {
        self.query = self.query.filter(Column::StartAt.gte(from));
        self
    }

    fn filter_eq_category(mut self, category: &str) -> Self {
        self.query = self.query.filter(Column::Category.eq(category));
        self
    }
}

pub trait EventOrder {
    fn order_by_start_at(self, order: Order) -> Self;
}

impl EventOrder for EventAdapter<'_> {
    fn order_by_start_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::StartAt, order);
        self
    }
}

pub trait EventQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl EventQuery for EventAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct EventParams {
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
}

pub trait EventMutation {
    fn create(
        self,
        params: EventParams,
        created_by: Uuid,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(self, event: Model, params: EventParams)
        -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, event: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl EventMutation for EventAdapter<'_> {
    async fn create(self, params: EventParams, created_by: Uuid) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(params.title),
            description: Set(params.description),
            location: Set(params.location),
            category: Set(params.category),
            start_at: Set(params.start_at),
            end_at: Set(params.end_at),
            image_url: Set(params.image_url),
            max_attendees: Set(params.max_attendees),
            registration_required: Set(params.registration_required),
            is_published: Set(params.is_published),
            created_by: Set(Some(created_by)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(self, event: Model, params: EventParams) -> Result<Model, DbErr> {
        let mut event = event.into_active_model();
        event.title = Set(params.title);
        event.description = Set(params.description);
        event.location = Set(params.location);
        event.category = Set(params.category);
        event.start_at = Set(params.start_at);
        event.end_at = Set(params.end_at);
        event.image_url = Set(params.image_url);
        event.max_attendees = Set(params.max_attendees);
        event.registration_required = Set(params.registration_required);
        event.is_published = Set(params.is_published);
        event.updated_at = Set(Utc::now().into());
        event.update(self.db).await
    }

    async fn delete(self, event: Model) -> Result<(), DbErr> {
        event.delete(self.db).await.map(|_| ())
    }
}
