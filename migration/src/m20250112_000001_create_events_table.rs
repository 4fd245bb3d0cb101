use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction,
        Index, MigrationTrait, SchemaManager, Table,
    },
    schema::{
        boolean, integer_null, string, string_null, text, timestamp_with_time_zone,
        timestamp_with_time_zone_null, uuid, uuid_null,
    },
};

const INDEX_NAME: &str = "events_is_published_start_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(uuid(Event::Id).primary_key())
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(string(Event::Location))
                    .col(string(Event::Category).default("General"))
                    .col(timestamp_with_time_zone(Event::StartAt))
                    .col(timestamp_with_time_zone_null(Event::EndAt))
                    .col(string_null(Event::ImageUrl))
                    .col(integer_null(Event::MaxAttendees))
                    .col(boolean(Event::RegistrationRequired).default(false))
                    .col(boolean(Event::IsPublished).default(false))
                    .col(uuid_null(Event::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-events-created_by")
                            .from(Event::Table, Event::CreatedBy)
                            .to(Admin::Table, Admin::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Event::Table)
                    .col(Event::IsPublished)
                    .col(Event::StartAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Event::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Title,
    Description,
    Location,
    Category,
    StartAt,
    EndAt,
    ImageUrl,
    MaxAttendees,
    RegistrationRequired,
    IsPublished,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Admin {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
}
