use db_adapters::blog_adapter::{BlogAdapter, BlogMutation, BlogQuery};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, ADMIN_OR_ABOVE};

pub async fn delete_blog<'a>(
    admin: admin::Model,
    blog_id: Uuid,
    blog_adapter: BlogAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let blog = blog_adapter
        .clone()
        .get_by_id(blog_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Blog post with this id was not found".to_string(),
        ))?;
    blog_adapter.delete(blog).await.map_err(error_500)
}
