use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::blog_adapter::BlogAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::blogs::{types::BlogUpdateRequest, update::update_blog};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    blog_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a blog post", skip(db, admin))]
#[put("/{blog_id}")]
pub async fn update_blog_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<BlogUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_blog(
                admin.into_inner(),
                req.into_inner(),
                path_param.blog_id,
                BlogAdapter::init(&db),
            )
            .await
            {
                Ok(res) => response_200(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
