use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::sermon_adapter::SermonAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::sermons::{create::create_sermon, types::SermonRequest};

use crate::utils::{response_201, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Creating a sermon", skip(db, admin))]
#[post("")]
pub async fn create_sermon_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<SermonRequest>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match create_sermon(admin.into_inner(), req.into_inner(), SermonAdapter::init(&db))
                .await
            {
                Ok(res) => response_201(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
