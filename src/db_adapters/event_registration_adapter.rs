use std::future::Future;

use chrono::Utc;
use sea_orm::{
    sea_query::Alias, ActiveModelTrait, ColumnTrait, DbConn, DbErr, DeriveColumn, EntityTrait,
    EnumIter, IntoActiveModel, ModelTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select,
    Set,
};
use uuid::Uuid;

use entities::{
    event,
    event_registration::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::RegistrationStatus,
};

use crate::map_unique_violation;

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
enum QueryAs {
    TotalAttendees,
}

#[derive(Clone)]
pub struct EventRegistrationAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> EventRegistrationAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait EventRegistrationFilter {
    fn filter_eq_event(self, event: &event::Model) -> Self;
    fn filter_ne_status(self, status: RegistrationStatus) -> Self;
}

impl EventRegistrationFilter for EventRegistrationAdapter<'_> {
    fn filter_eq_event(mut self, event: &event::Model) -> Self {
        self.query = self.query.filter(Column::EventId.eq(event.id));
        self
    }

    fn filter_ne_status(mut self, status: RegistrationStatus) -> Self {
        self.query = self.query.filter(Column::Status.ne(status));
        self
    }
}

pub trait EventRegistrationOrder {
    fn order_by_created_at(self, order: Order) -> Self;
}

impl EventRegistrationOrder for EventRegistrationAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait EventRegistrationQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    /// Sum of `attendees` over the filtered rows, 0 when nothing matches.
    fn sum_attendees(self) -> impl Future<Output = Result<i64, DbErr>>;
}

impl EventRegistrationQuery for EventRegistrationAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn sum_attendees(self) -> Result<i64, DbErr> {
        let total = self
            .query
            .select_only()
            .column_as(
                Column::Attendees.sum().cast_as(Alias::new("BIGINT")),
                QueryAs::TotalAttendees,
            )
            .into_values::<Option<i64>, QueryAs>()
            .one(self.db)
            .await?;
        Ok(total.flatten().unwrap_or(0))
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventRegistrationParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub attendees: i32,
    pub notes: Option<String>,
}

pub trait EventRegistrationMutation {
    fn create(
        self,
        event: &event::Model,
        params: CreateEventRegistrationParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_status(
        self,
        registration: Model,
        status: RegistrationStatus,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, registration: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl EventRegistrationMutation for EventRegistrationAdapter<'_> {
    async fn create(
        self,
        event: &event::Model,
        params: CreateEventRegistrationParams,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            event_id: Set(event.id),
            name: Set(params.name),
            email: Set(params.email),
            phone: Set(params.phone),
            attendees: Set(params.attendees),
            notes: Set(params.notes),
            status: Set(RegistrationStatus::Registered),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
        .map_err(map_unique_violation)
    }

    async fn update_status(
        self,
        registration: Model,
        status: RegistrationStatus,
    ) -> Result<Model, DbErr> {
        let mut registration = registration.into_active_model();
        registration.status = Set(status);
        registration.updated_at = Set(Utc::now().into());
        registration.update(self.db).await
    }

    async fn delete(self, registration: Model) -> Result<(), DbErr> {
        registration.delete(self.db).await.map(|_| ())
    }
}
