use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction,
        Index, MigrationTrait, SchemaManager, Table,
    },
    schema::{integer, string, string_len, string_null, text_null, timestamp_with_time_zone, uuid},
};

const UNIQUE_INDEX_NAME: &str = "event_registrations_event_id_email_unique_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventRegistration::Table)
                    .if_not_exists()
                    .col(uuid(EventRegistration::Id).primary_key())
                    .col(uuid(EventRegistration::EventId))
                    .col(string(EventRegistration::Name))
                    .col(string(EventRegistration::Email))
                    .col(string_null(EventRegistration::Phone))
                    .col(integer(EventRegistration::Attendees).default(1))
                    .col(text_null(EventRegistration::Notes))
                    .col(string_len(EventRegistration::Status, 16).default("Registered"))
                    .col(
                        timestamp_with_time_zone(EventRegistration::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(EventRegistration::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_registrations-event_id")
                            .from(EventRegistration::Table, EventRegistration::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_INDEX_NAME)
                    .table(EventRegistration::Table)
                    .col(EventRegistration::EventId)
                    .col(EventRegistration::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UNIQUE_INDEX_NAME)
                    .table(EventRegistration::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(EventRegistration::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EventRegistration {
    #[sea_orm(iden = "event_registrations")]
    Table,
    Id,
    EventId,
    Name,
    Email,
    Phone,
    Attendees,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
}
