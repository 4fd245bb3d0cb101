use std::future::Future;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sea_query::Alias, ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, ModelTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use entities::{
    donation::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::{DonationFund, DonationStatus, PaymentMethod},
};

use crate::{map_unique_violation, PageParams};

#[derive(Clone)]
pub struct DonationAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> DonationAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait DonationFilter {
    fn filter_eq_fund(self, fund: DonationFund) -> Self;
    fn filter_eq_status(self, status: DonationStatus) -> Self;
    fn filter_receipt_number_starts_with(self, prefix: &str) -> Self;
}

impl DonationFilter for DonationAdapter<'_> {
    fn filter_eq_fund(mut self, fund: DonationFund) -> Self {
        self.query = self.query.filter(Column::Fund.eq(fund));
        self
    }

    fn filter_eq_status(mut self, status: DonationStatus) -> Self {
        self.query = self.query.filter(Column::Status.eq(status));
        self
    }

    fn filter_receipt_number_starts_with(mut self, prefix: &str) -> Self {
        self.query = self.query.filter(Column::ReceiptNumber.starts_with(prefix));
        self
    }
}

pub trait DonationOrder {
    fn order_by_donated_at(self, order: Order) -> Self;
}

impl DonationOrder for DonationAdapter<'_> {
    fn order_by_donated_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::DonatedAt, order);
        self
    }
}

#[derive(FromQueryResult, Debug, Serialize, Deserialize, PartialEq)]
pub struct DonationFundSummary {
    pub fund: DonationFund,
    pub total_amount: i64,
    pub donation_count: i64,
}

pub trait DonationQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_receipt_number(
        self,
        receipt_number: &str,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_page(self, page: PageParams) -> impl Future<Output = Result<(Vec<Model>, u64), DbErr>>;
    fn get_receipt_numbers(self) -> impl Future<Output = Result<Vec<String>, DbErr>>;
    fn summarize_by_fund(self) -> impl Future<Output = Result<Vec<DonationFundSummary>, DbErr>>;
}

impl DonationQuery for DonationAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_receipt_number(self, receipt_number: &str) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::ReceiptNumber.eq(receipt_number))
            .one(self.db)
            .await
    }

    async fn get_page(self, page: PageParams) -> Result<(Vec<Model>, u64), DbErr> {
        let paginator = self.query.paginate(self.db, page.limit);
        let total = paginator.num_items().await?;
        let donations = paginator.fetch_page(page.page - 1).await?;
        Ok((donations, total))
    }

    async fn get_receipt_numbers(self) -> Result<Vec<String>, DbErr> {
        self.query
            .select_only()
            .column(Column::ReceiptNumber)
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn summarize_by_fund(self) -> Result<Vec<DonationFundSummary>, DbErr> {
        self.query
            .select_only()
            .column(Column::Fund)
            .column_as(
                Column::Amount.sum().cast_as(Alias::new("BIGINT")),
                "total_amount",
            )
            .column_as(
                Column::Id.count().cast_as(Alias::new("BIGINT")),
                "donation_count",
            )
            .group_by(Column::Fund)
            .order_by_asc(Column::Fund)
            .into_model::<DonationFundSummary>()
            .all(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateDonationParams {
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub fund: DonationFund,
    pub payment_method: PaymentMethod,
    pub status: DonationStatus,
    pub is_anonymous: bool,
    pub notes: Option<String>,
    pub receipt_number: String,
    pub transaction_id: String,
    pub donated_at: DateTime<FixedOffset>,
}

pub trait DonationMutation {
    fn create(self, params: CreateDonationParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_status(
        self,
        donation: Model,
        status: DonationStatus,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, donation: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl DonationMutation for DonationAdapter<'_> {
    async fn create(self, params: CreateDonationParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            donor_name: Set(params.donor_name),
            donor_email: Set(params.donor_email),
            amount: Set(params.amount),
            currency: Set(params.currency),
            fund: Set(params.fund),
            payment_method: Set(params.payment_method),
            status: Set(params.status),
            is_anonymous: Set(params.is_anonymous),
            notes: Set(params.notes),
            receipt_number: Set(params.receipt_number),
            transaction_id: Set(params.transaction_id),
            donated_at: Set(params.donated_at),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
        .map_err(map_unique_violation)
    }

    async fn update_status(self, donation: Model, status: DonationStatus) -> Result<Model, DbErr> {
        let mut donation = donation.into_active_model();
        donation.status = Set(status);
        donation.updated_at = Set(Utc::now().into());
        donation.update(self.db).await
    }

    async fn delete(self, donation: Model) -> Result<(), DbErr> {
        donation.delete(self.db).await.map(|_| ())
    }
}
