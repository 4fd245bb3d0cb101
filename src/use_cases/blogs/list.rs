use db_adapters::{
    blog_adapter::{BlogAdapter, BlogFilter, BlogOrder, BlogQuery},
    Order::Desc,
    PageParams,
};
use entities::{admin, sea_orm_active_enums::BlogStatus};

use crate::{
    blogs::types::{BlogListQuery, BlogVisible},
    error_500, require_role, Paginated, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn list_published_blogs<'a>(
    query: BlogListQuery,
    blog_adapter: BlogAdapter<'a>,
) -> Result<Paginated<BlogVisible>, UseCaseError> {
    let blog_adapter = blog_adapter
        .filter_eq_status(BlogStatus::Published)
        .order_by_published_at(Desc);
    list_page(query, blog_adapter).await
}

pub async fn list_all_blogs<'a>(
    admin: admin::Model,
    query: BlogListQuery,
    blog_adapter: BlogAdapter<'a>,
) -> Result<Paginated<BlogVisible>, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    list_page(query, blog_adapter).await
}

async fn list_page<'a>(
    query: BlogListQuery,
    mut blog_adapter: BlogAdapter<'a>,
) -> Result<Paginated<BlogVisible>, UseCaseError> {
    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        blog_adapter = blog_adapter.filter_eq_category(category);
    }
    if let Some(search) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        blog_adapter = blog_adapter.filter_search(search);
    }
    let page = PageParams::new(query.page, query.limit);
    blog_adapter
        .order_by_created_at(Desc)
        .get_page(page)
        .await
        .map(|(blogs, total)| {
            Paginated::new(blogs.into_iter().map(BlogVisible::from).collect(), total, page)
        })
        .map_err(error_500)
}
