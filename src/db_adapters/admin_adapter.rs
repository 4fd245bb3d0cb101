use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    admin::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::AdminRole,
};

use crate::map_unique_violation;

#[derive(Clone)]
pub struct AdminAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> AdminAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait AdminFilter {
    fn filter_eq_is_active(self, is_active: bool) -> Self;
}

impl AdminFilter for AdminAdapter<'_> {
    fn filter_eq_is_active(mut self, is_active: bool) -> Self {
        self.query = self.query.filter(Column::IsActive.eq(is_active));
        self
    }
}

pub trait AdminOrder {
    fn order_by_created_at(self, order: Order) -> Self;
}

impl AdminOrder for AdminAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait AdminQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email(self, email: &str) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn count(self) -> impl Future<Output = Result<u64, DbErr>>;
}

impl AdminQuery for AdminAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_email(self, email: &str) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn count(self) -> Result<u64, DbErr> {
        self.query.count(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AdminRole,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAdminParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<AdminRole>,
    pub is_active: Option<bool>,
}

pub trait AdminMutation {
    fn create(self, params: CreateAdminParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn partial_update(
        self,
        admin: Model,
        params: UpdateAdminParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_password(
        self,
        admin: Model,
        password: String,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn touch_last_login(self, admin: Model) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, admin: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl AdminMutation for AdminAdapter<'_> {
    async fn create(self, params: CreateAdminParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            username: Set(params.username),
            email: Set(params.email),
            password: Set(params.password),
            first_name: Set(params.first_name),
            last_name: Set(params.last_name),
            role: Set(params.role),
            is_active: Set(true),
            last_login_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
        .map_err(map_unique_violation)
    }

    async fn partial_update(self, admin: Model, params: UpdateAdminParams) -> Result<Model, DbErr> {
        let mut admin = admin.into_active_model();
        if let Some(first_name) = params.first_name {
            admin.first_name = Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            admin.last_name = Set(last_name);
        }
        if let Some(role) = params.role {
            admin.role = Set(role);
        }
        if let Some(is_active) = params.is_active {
            admin.is_active = Set(is_active);
        }
        admin.updated_at = Set(Utc::now().into());
        admin.update(self.db).await
    }

    async fn update_password(self, admin: Model, password: String) -> Result<Model, DbErr> {
        let mut admin = admin.into_active_model();
        admin.password = Set(password);
        admin.updated_at = Set(Utc::now().into());
        admin.update(self.db).await
    }

    async fn touch_last_login(self, admin: Model) -> Result<Model, DbErr> {
        let mut admin = admin.into_active_model();
        admin.last_login_at = Set(Some(Utc::now().into()));
        admin.update(self.db).await
    }

    async fn delete(self, admin: Model) -> Result<(), DbErr> {
        admin.delete(self.db).await.map(|_| ())
    }
}
