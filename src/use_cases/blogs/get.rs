use db_adapters::blog_adapter::{BlogAdapter, BlogFilter, BlogMutation, BlogQuery};
use entities::sea_orm_active_enums::BlogStatus;
use uuid::Uuid;

use crate::{blogs::types::BlogVisible, error_500, UseCaseError};

/// Every successful read counts as one view.
pub async fn get_published_blog<'a>(
    blog_id: Uuid,
    blog_adapter: BlogAdapter<'a>,
) -> Result<BlogVisible, UseCaseError> {
    let blog = blog_adapter
        .clone()
        .filter_eq_status(BlogStatus::Published)
        .get_by_id(blog_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Blog post with this id was not found".to_string(),
        ))?;

    blog_adapter
        .increment_views(blog)
        .await
        .map(BlogVisible::from)
        .map_err(error_500)
}
