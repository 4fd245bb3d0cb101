use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction,
        Index, MigrationTrait, SchemaManager, Table,
    },
    schema::{
        integer, string, string_len, string_null, string_uniq, text, text_null,
        timestamp_with_time_zone, timestamp_with_time_zone_null, uuid, uuid_null,
    },
};

const INDEX_NAME: &str = "blogs_status_published_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(uuid(Blog::Id).primary_key())
                    .col(string(Blog::Title))
                    .col(string_uniq(Blog::Slug))
                    .col(text(Blog::Content))
                    .col(text_null(Blog::Excerpt))
                    .col(string_null(Blog::FeaturedImage))
                    .col(string(Blog::Category).default("General"))
                    .col(string(Blog::Tags).default(""))
                    .col(string_len(Blog::Status, 16).default("Draft"))
                    .col(integer(Blog::Views).default(0))
                    .col(uuid_null(Blog::AuthorId))
                    .col(timestamp_with_time_zone_null(Blog::PublishedAt))
                    .col(
                        timestamp_with_time_zone(Blog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Blog::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blogs-author_id")
                            .from(Blog::Table, Blog::AuthorId)
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
                    .table(Blog::Table)
                    .col(Blog::Status)
                    .col(Blog::PublishedAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Blog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Blog {
    #[sea_orm(iden = "blogs")]
    Table,
    Id,
    Title,
    Slug,
    Content,
    Excerpt,
    FeaturedImage,
    Category,
    Tags,
    Status,
    Views,
    AuthorId,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Admin {
    #[sea_orm(iden = "admins")]
    Table,
    Id,
}
