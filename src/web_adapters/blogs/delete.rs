use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::blog_adapter::BlogAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::blogs::delete::delete_blog;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    blog_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a blog post", skip(db, admin))]
#[delete("/{blog_id}")]
pub async fn delete_blog_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_blog(admin.into_inner(), path_param.blog_id, BlogAdapter::init(&db)).await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
