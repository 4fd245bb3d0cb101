use std::future::Future;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    blog::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::BlogStatus,
};

use crate::{map_unique_violation, PageParams};

#[derive(Clone)]
pub struct BlogAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> BlogAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait BlogFilter {
    fn filter_eq_status(self, status: BlogStatus) -> Self;
    fn filter_eq_category(self, category: &str) -> Self;
    fn filter_search(self, search: &str) -> Self;
}

impl BlogFilter for BlogAdapter<'_> {
    fn filter_eq_status(mut self, status: BlogStatus) -> Self {
        self.query = self.query.filter(Column::Status.eq(status));
        self
    }

    fn filter_eq_category(mut self, category: &str) -> Self {
        self.query = self.query.filter(Column::Category.eq(category));
        self
    }

    fn filter_search(mut self, search: &str) -> Self {
        self.query = self.query.filter(
            Condition::any()
                .add(Column::Title.contains(search))
                .add(Column::Content.contains(search)),
        );
        self
    }
}

pub trait BlogOrder {
    fn order_by_published_at(self, order: Order) -> Self;
    fn order_by_created_at(self, order: Order) -> Self;
}

impl BlogOrder for BlogAdapter<'_> {
    fn order_by_published_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::PublishedAt, order);
        self
    }

    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait BlogQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_slug(self, slug: &str) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_page(self, page: PageParams) -> impl Future<Output = Result<(Vec<Model>, u64), DbErr>>;
}

impl BlogQuery for BlogAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_slug(self, slug: &str) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Slug.eq(slug)).one(self.db).await
    }

    async fn get_page(self, page: PageParams) -> Result<(Vec<Model>, u64), DbErr> {
        let paginator = self.query.paginate(self.db, page.limit);
        let total = paginator.num_items().await?;
        let blogs = paginator.fetch_page(page.page - 1).await?;
        Ok((blogs, total))
    }
}

#[derive(Debug, Clone)]
pub struct CreateBlogParams {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: BlogStatus,
    pub author_id: Uuid,
    pub published_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone)]
pub struct UpdateBlogParams {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub status: BlogStatus,
    pub published_at: Option<DateTime<FixedOffset>>,
}

pub trait BlogMutation {
    fn create(self, params: CreateBlogParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(self, blog: Model, params: UpdateBlogParams)
        -> impl Future<Output = Result<Model, DbErr>>;
    fn increment_views(self, blog: Model) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, blog: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl BlogMutation for BlogAdapter<'_> {
    async fn create(self, params: CreateBlogParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(params.title),
            slug: Set(params.slug),
            content: Set(params.content),
            excerpt: Set(params.excerpt),
            featured_image: Set(params.featured_image),
            category: Set(params.category),
            tags: Set(params.tags),
            status: Set(params.status),
            views: Set(0),
            author_id: Set(Some(params.author_id)),
            published_at: Set(params.published_at),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
        .map_err(map_unique_violation)
    }

    async fn update(self, blog: Model, params: UpdateBlogParams) -> Result<Model, DbErr> {
        let mut blog = blog.into_active_model();
        blog.title = Set(params.title);
        blog.slug = Set(params.slug);
        blog.content = Set(params.content);
        blog.excerpt = Set(params.excerpt);
        blog.featured_image = Set(params.featured_image);
        blog.category = Set(params.category);
        blog.tags = Set(params.tags);
        blog.status = Set(params.status);
        blog.published_at = Set(params.published_at);
        blog.updated_at = Set(Utc::now().into());
        blog.update(self.db).await.map_err(map_unique_violation)
    }

    /// Increments in SQL so concurrent readers never lose a view.
    async fn increment_views(self, blog: Model) -> Result<Model, DbErr> {
        Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(blog.id))
            .exec(self.db)
            .await?;
        Entity::find_by_id(blog.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("blog {}", blog.id)))
    }

    async fn delete(self, blog: Model) -> Result<(), DbErr> {
        blog.delete(self.db).await.map(|_| ())
    }
}
