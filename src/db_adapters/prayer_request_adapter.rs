use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait, Order,
    QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    prayer_request::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::PrayerRequestStatus,
};

#[derive(Clone)]
pub struct PrayerRequestAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> PrayerRequestAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait PrayerRequestFilter {
    fn filter_eq_is_public(self, is_public: bool) -> Self;
    fn filter_eq_status(self, status: PrayerRequestStatus) -> Self;
    fn filter_ne_status(self, status: PrayerRequestStatus) -> Self;
}

impl PrayerRequestFilter for PrayerRequestAdapter<'_> {
    fn filter_eq_is_public(mut self, is_public: bool) -> Self {
        self.query = self.query.filter(Column::IsPublic.eq(is_public));
        self
    }

    fn filter_eq_status(mut self, status: PrayerRequestStatus) -> Self {
        self.query = self.query.filter(Column::Status.eq(status));
        self
    }

    fn filter_ne_status(mut self, status: PrayerRequestStatus) -> Self {
        self.query = self.query.filter(Column::Status.ne(status));
        self
    }
}

pub trait PrayerRequestOrder {
    fn order_by_created_at(self, order: Order) -> Self;
}

impl PrayerRequestOrder for PrayerRequestAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait PrayerRequestQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl PrayerRequestQuery for PrayerRequestAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreatePrayerRequestParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub request: String,
    pub is_anonymous: bool,
    pub is_public: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePrayerRequestParams {
    pub status: Option<PrayerRequestStatus>,
    pub is_public: Option<bool>,
}

pub trait PrayerRequestMutation {
    fn create(
        self,
        params: CreatePrayerRequestParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn partial_update(
        self,
        prayer_request: Model,
        params: UpdatePrayerRequestParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, prayer_request: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl PrayerRequestMutation for PrayerRequestAdapter<'_> {
    async fn create(self, params: CreatePrayerRequestParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(params.name),
            email: Set(params.email),
            request: Set(params.request),
            is_anonymous: Set(params.is_anonymous),
            is_public: Set(params.is_public),
            status: Set(PrayerRequestStatus::Pending),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn partial_update(
        self,
        prayer_request: Model,
        params: UpdatePrayerRequestParams,
    ) -> Result<Model, DbErr> {
        let mut prayer_request = prayer_request.into_active_model();
        if let Some(status) = params.status {
            prayer_request.status = Set(status);
        }
        if let Some(is_public) = params.is_public {
            prayer_request.is_public = Set(is_public);
        }
        prayer_request.updated_at = Set(Utc::now().into());
        prayer_request.update(self.db).await
    }

    async fn delete(self, prayer_request: Model) -> Result<(), DbErr> {
        prayer_request.delete(self.db).await.map(|_| ())
    }
}
