use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::blog_adapter::BlogAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::blogs::{create::create_blog, types::BlogCreateRequest};

use crate::utils::{response_201, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Creating a blog post", skip(db, admin))]
#[post("")]
pub async fn create_blog_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<BlogCreateRequest>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match create_blog(admin.into_inner(), req.into_inner(), BlogAdapter::init(&db)).await
            {
                Ok(res) => response_201(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
