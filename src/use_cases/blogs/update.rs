use chrono::Utc;
use db_adapters::{
    blog_adapter::{BlogAdapter, BlogMutation, BlogQuery, UpdateBlogParams},
    is_duplicate,
};
use entities::{admin, custom_methods::blog::join_tags, sea_orm_active_enums::BlogStatus};
use uuid::Uuid;

use crate::{
    blogs::{
        slug::resolve_slug,
        types::{BlogUpdateRequest, BlogVisible},
    },
    error_500, require_not_blank, require_role, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn update_blog<'a>(
    admin: admin::Model,
    params: BlogUpdateRequest,
    blog_id: Uuid,
    blog_adapter: BlogAdapter<'a>,
) -> Result<BlogVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let blog = blog_adapter
        .clone()
        .get_by_id(blog_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Blog post with this id was not found".to_string(),
        ))?;

    let title = params.title.unwrap_or(blog.title.clone());
    require_not_blank(&title, "Title")?;
    let content = params.content.unwrap_or(blog.content.clone());
    require_not_blank(&content, "Content")?;
    let slug = match params.slug {
        Some(slug) => resolve_slug(Some(slug.as_str()), &title)?,
        None => blog.slug.clone(),
    };
    let status = params.status.unwrap_or(blog.status);
    let published_at = match (status, blog.published_at) {
        (BlogStatus::Published, None) => Some(Utc::now().into()),
        (_, published_at) => published_at,
    };

    match blog_adapter
        .update(
            blog.clone(),
            UpdateBlogParams {
                title: title.trim().to_string(),
                slug,
                content,
                excerpt: params.excerpt.unwrap_or(blog.excerpt),
                featured_image: params.featured_image.unwrap_or(blog.featured_image),
                category: params.category.unwrap_or(blog.category),
                tags: match params.tags {
                    Some(tags) => join_tags(&tags),
                    None => blog.tags,
                },
                status,
                published_at,
            },
        )
        .await
    {
        Ok(blog) => Ok(BlogVisible::from(blog)),
        Err(e) if is_duplicate(&e) => Err(UseCaseError::Conflict(
            "A blog post with this slug already exists.".to_string(),
        )),
        Err(e) => Err(error_500(e)),
    }
}
