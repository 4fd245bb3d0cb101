use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{
        big_integer, boolean, string_len, string_null, string_uniq, text_null,
        timestamp_with_time_zone, uuid,
    },
};

const INDEX_NAME: &str = "donations_fund_status_donated_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(uuid(Donation::Id).primary_key())
                    .col(string_null(Donation::DonorName))
                    .col(string_null(Donation::DonorEmail))
                    .col(big_integer(Donation::Amount).comment("In minor currency units"))
                    .col(string_len(Donation::Currency, 3).default("USD"))
                    .col(string_len(Donation::Fund, 16).default("Offering"))
                    .col(string_len(Donation::PaymentMethod, 16).default("Online"))
                    .col(string_len(Donation::Status, 16).default("Pending"))
                    .col(boolean(Donation::IsAnonymous).default(false))
                    .col(text_null(Donation::Notes))
                    .col(string_uniq(Donation::ReceiptNumber))
                    .col(string_uniq(Donation::TransactionId))
                    .col(timestamp_with_time_zone(Donation::DonatedAt))
                    .col(
                        timestamp_with_time_zone(Donation::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Donation::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Donation::Table)
                    .col(Donation::Fund)
                    .col(Donation::Status)
                    .col(Donation::DonatedAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Donation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Donation {
    #[sea_orm(iden = "donations")]
    Table,
    Id,
    DonorName,
    DonorEmail,
    Amount,
    Currency,
    Fund,
    PaymentMethod,
    Status,
    IsAnonymous,
    Notes,
    ReceiptNumber,
    TransactionId,
    DonatedAt,
    CreatedAt,
    UpdatedAt,
}
