use chrono::Utc;
use db_adapters::{
    blog_adapter::{BlogAdapter, BlogMutation, CreateBlogParams},
    is_duplicate,
};
use entities::{admin, custom_methods::blog::join_tags, sea_orm_active_enums::BlogStatus};

use crate::{
    blogs::{
        slug::resolve_slug,
        types::{BlogCreateRequest, BlogVisible, DEFAULT_CATEGORY},
    },
    error_500, require_not_blank, require_role, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn create_blog<'a>(
    admin: admin::Model,
    params: BlogCreateRequest,
    blog_adapter: BlogAdapter<'a>,
) -> Result<BlogVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    require_not_blank(&params.title, "Title")?;
    require_not_blank(&params.content, "Content")?;
    let slug = resolve_slug(params.slug.as_deref(), &params.title)?;
    let status = params.status.unwrap_or(BlogStatus::Draft);

    match blog_adapter
        .create(CreateBlogParams {
            title: params.title.trim().to_string(),
            slug,
            content: params.content,
            excerpt: params.excerpt,
            featured_image: params.featured_image,
            category: params
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(DEFAULT_CATEGORY.to_string()),
            tags: join_tags(&params.tags.unwrap_or_default()),
            status,
            author_id: admin.id,
            published_at: match status {
                BlogStatus::Published => Some(Utc::now().into()),
                _ => None,
            },
        })
        .await
    {
        Ok(blog) => Ok(BlogVisible::from(blog)),
        Err(e) if is_duplicate(&e) => Err(UseCaseError::Conflict(
            "A blog post with this slug already exists.".to_string(),
        )),
        Err(e) => Err(error_500(e)),
    }
}
