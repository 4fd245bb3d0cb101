use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{boolean, date, string, string_null, text_null, timestamp_with_time_zone, uuid},
};

const INDEX_NAME: &str = "sermons_is_published_preached_on_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sermon::Table)
                    .if_not_exists()
                    .col(uuid(Sermon::Id).primary_key())
                    .col(string(Sermon::Title))
                    .col(string(Sermon::Speaker))
                    .col(date(Sermon::PreachedOn))
                    .col(string_null(Sermon::Scripture))
                    .col(text_null(Sermon::Description))
                    .col(string_null(Sermon::Series))
                    .col(string_null(Sermon::VideoUrl))
                    .col(string_null(Sermon::AudioUrl))
                    .col(string_null(Sermon::ThumbnailUrl))
                    .col(boolean(Sermon::IsPublished).default(false))
                    .col(
                        timestamp_with_time_zone(Sermon::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Sermon::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Sermon::Table)
                    .col(Sermon::IsPublished)
                    .col(Sermon::PreachedOn)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Sermon::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sermon::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Sermon {
    #[sea_orm(iden = "sermons")]
    Table,
    Id,
    Title,
    Speaker,
    PreachedOn,
    Scripture,
    Description,
    Series,
    VideoUrl,
    AudioUrl,
    ThumbnailUrl,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
