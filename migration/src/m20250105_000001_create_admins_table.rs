use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        boolean, string, string_len, string_uniq, timestamp_with_time_zone,
        timestamp_with_time_zone_null, uuid,
    },
};

const INDEX_NAME: &str = "admins_id_email_is_active_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(uuid(Admin::Id).primary_key())
                    .col(string_uniq(Admin::Username))
                    .col(string_uniq(Admin::Email))
                    .col(string(Admin::Password))
                    .col(string(Admin::FirstName))
                    .col(string(Admin::LastName))
                    .col(string_len(Admin::Role, 16).default("Editor"))
                    .col(boolean(Admin::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Admin::LastLoginAt))
                    .col(
                        timestamp_with_time_zone(Admin::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Admin::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Admin::Table)
                    .col(Admin::Id)
                    .col(Admin::Email)
                    .col(Admin::IsActive)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Admin::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Admin {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
    Username,
    Email,
    Password,
    FirstName,
    LastName,
    Role,
    IsActive,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
