use std::future::Future;

use chrono::{NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait, Order,
    QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::service_schedule::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct ServiceScheduleAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> ServiceScheduleAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait ServiceScheduleFilter {
    fn filter_eq_is_active(self, is_active: bool) -> Self;
}

impl ServiceScheduleFilter for ServiceScheduleAdapter<'_> {
    fn filter_eq_is_active(mut self, is_active: bool) -> Self {
        self.query = self.query.filter(Column::IsActive.eq(is_active));
        self
    }
}

pub trait ServiceScheduleOrder {
    fn order_by_day_of_week(self, order: Order) -> Self;
    fn order_by_start_time(self, order: Order) -> Self;
}

impl ServiceScheduleOrder for ServiceScheduleAdapter<'_> {
    fn order_by_day_of_week(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::DayOfWeek, order);
        self
    }

    fn order_by_start_time(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::StartTime, order);
        self
    }
}

pub trait ServiceScheduleQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl ServiceScheduleQuery for ServiceScheduleAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct ServiceScheduleParams {
    pub title: String,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub location: String,
    pub description: Option<String>,
    pub is_active: bool,
}

pub trait ServiceScheduleMutation {
    fn create(self, params: ServiceScheduleParams)
        -> impl Future<Output = Result<Model, DbErr>>;
    fn update(
        self,
        service_schedule: Model,
        params: ServiceScheduleParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, service_schedule: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl ServiceScheduleMutation for ServiceScheduleAdapter<'_> {
    async fn create(self, params: ServiceScheduleParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(params.title),
            day_of_week: Set(params.day_of_week),
            start_time: Set(params.start_time),
            end_time: Set(params.end_time),
            location: Set(params.location),
            description: Set(params.description),
            is_active: Set(params.is_active),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(
        self,
        service_schedule: Model,
        params: ServiceScheduleParams,
    ) -> Result<Model, DbErr> {
        let mut service_schedule = service_schedule.into_active_model();
        service_schedule.title = Set(params.title);
        service_schedule.day_of_week = Set(params.day_of_week);
        service_schedule.start_time = Set(params.start_time);
        service_schedule.end_time = Set(params.end_time);
        service_schedule.location = Set(params.location);
        service_schedule.description = Set(params.description);
        service_schedule.is_active = Set(params.is_active);
        service_schedule.updated_at = Set(Utc::now().into());
        service_schedule.update(self.db).await
    }

    async fn delete(self, service_schedule: Model) -> Result<(), DbErr> {
        service_schedule.delete(self.db).await.map(|_| ())
    }
}
