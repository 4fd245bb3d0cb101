use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::blog_adapter::BlogAdapter;
use sea_orm::DbConn;
use use_cases::blogs::get::get_published_blog;

use crate::utils::{response_200, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    blog_id: uuid::Uuid,
}

#[tracing::instrument(name = "Reading a blog post", skip(db))]
#[get("/{blog_id}")]
pub async fn get_blog_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_published_blog(path_param.blog_id, BlogAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}
