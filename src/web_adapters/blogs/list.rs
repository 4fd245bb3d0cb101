use actix_web::{
    get,
    web::{Data, Query, ReqData},
    HttpResponse,
};
use db_adapters::blog_adapter::BlogAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::blogs::{
    list::{list_all_blogs, list_published_blogs},
    types::BlogListQuery,
};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Listing published blog posts", skip(db))]
#[get("")]
pub async fn list_published_blogs_endpoint(
    db: Data<DbConn>,
    query: Query<BlogListQuery>,
) -> HttpResponse {
    match list_published_blogs(query.into_inner(), BlogAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}

#[tracing::instrument(name = "Listing all blog posts", skip(db, admin))]
#[get("/admin/all")]
pub async fn list_all_blogs_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    query: Query<BlogListQuery>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match list_all_blogs(admin.into_inner(), query.into_inner(), BlogAdapter::init(&db))
                .await
            {
                Ok(res) => response_200(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
