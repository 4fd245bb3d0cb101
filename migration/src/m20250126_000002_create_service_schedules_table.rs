use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{
        boolean, small_integer, string, text_null, time, time_null, timestamp_with_time_zone, uuid,
    },
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceSchedule::Table)
                    .if_not_exists()
                    .col(uuid(ServiceSchedule::Id).primary_key())
                    .col(string(ServiceSchedule::Title))
                    .col(
                        small_integer(ServiceSchedule::DayOfWeek)
                            .check(Expr::col(ServiceSchedule::DayOfWeek).between(0, 6))
                            .comment("Starts from Sunday=0"),
                    )
                    .col(time(ServiceSchedule::StartTime))
                    .col(time_null(ServiceSchedule::EndTime))
                    .col(string(ServiceSchedule::Location))
                    .col(text_null(ServiceSchedule::Description))
                    .col(boolean(ServiceSchedule::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(ServiceSchedule::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ServiceSchedule::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceSchedule {
    #[sea_orm(iden = "service_schedules")]
    Table,
    Id,
    Title,
    DayOfWeek,
    StartTime,
    EndTime,
    Location,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
