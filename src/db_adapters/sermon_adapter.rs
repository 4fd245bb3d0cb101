use std::future::Future;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait, Order,
    QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::sermon::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct SermonAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> SermonAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait SermonFilter {
    fn filter_eq_is_published(self, is_published: bool) -> Self;
    fn filter_eq_series(self, series: &str) -> Self;
    fn filter_eq_speaker(self, speaker: &str) -> Self;
}

impl SermonFilter for SermonAdapter<'_> {
    fn filter_eq_is_published(mut self, is_published: bool) -> Self {
        self.query = self.query.filter(Column::IsPublished.eq(is_published));
        self
    }

    fn filter_eq_series(mut self, series: &str) -> Self {
        self.query = self.query.filter(Column::Series.eq(series));
        self
    }

    fn filter_eq_speaker(mut self, speaker: &str) -> Self {
        self.query = self.query.filter(Column::Speaker.eq(speaker));
        self
    }
}

pub trait SermonOrder {
    fn order_by_preached_on(self, order: Order) -> Self;
    fn order_by_created_at(self, order: Order) -> Self;
}

impl SermonOrder for SermonAdapter<'_> {
    fn order_by_preached_on(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::PreachedOn, order);
        self
    }

    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait SermonQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl SermonQuery for SermonAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct SermonParams {
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
}

pub trait SermonMutation {
    fn create(self, params: SermonParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(self, sermon: Model, params: SermonParams)
        -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, sermon: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl SermonMutation for SermonAdapter<'_> {
    async fn create(self, params: SermonParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(params.title),
            speaker: Set(params.speaker),
            preached_on: Set(params.preached_on),
            scripture: Set(params.scripture),
            description: Set(params.description),
            series: Set(params.series),
            video_url: Set(params.video_url),
            audio_url: Set(params.audio_url),
            thumbnail_url: Set(params.thumbnail_url),
            is_published: Set(params.is_published),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(self, sermon: Model, params: SermonParams) -> Result<Model, DbErr> {
        let mut sermon = sermon.into_active_model();
        sermon.title = Set(params.title);
        sermon.speaker = Set(params.speaker);
        sermon.preached_on = Set(params.preached_on);
        sermon.scripture = Set(params.scripture);
        sermon.description = Set(params.description);
        sermon.series = Set(params.series);
        sermon.video_url = Set(params.video_url);
        sermon.audio_url = Set(params.audio_url);
        sermon.thumbnail_url = Set(params.thumbnail_url);
        sermon.is_published = Set(params.is_published);
        sermon.updated_at = Set(Utc::now().into());
        sermon.update(self.db).await
    }

    async fn delete(self, sermon: Model) -> Result<(), DbErr> {
        sermon.delete(self.db).await.map(|_| ())
    }
}
