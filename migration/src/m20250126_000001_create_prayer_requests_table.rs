use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{boolean, string_len, string_null, text, timestamp_with_time_zone, uuid},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrayerRequest::Table)
                    .if_not_exists()
                    .col(uuid(PrayerRequest::Id).primary_key())
                    .col(string_null(PrayerRequest::Name))
                    .col(string_null(PrayerRequest::Email))
                    .col(text(PrayerRequest::Request))
                    .col(boolean(PrayerRequest::IsAnonymous).default(false))
                    .col(boolean(PrayerRequest::IsPublic).default(false))
                    .col(string_len(PrayerRequest::Status, 16).default("Pending"))
                    .col(
                        timestamp_with_time_zone(PrayerRequest::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PrayerRequest::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrayerRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PrayerRequest {
    #[sea_orm(iden = "prayer_requests")]
    Table,
    Id,
    Name,
    Email,
    Request,
    IsAnonymous,
    IsPublic,
    Status,
    CreatedAt,
    UpdatedAt,
}
