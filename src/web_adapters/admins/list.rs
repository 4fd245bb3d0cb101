use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::admin_adapter::AdminAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::admins::list::list_admins;

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Listing admins", skip(db, admin))]
#[get("")]
pub async fn list_admins_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
) -> HttpResponse {
    match admin {
        Some(admin) => match list_admins(admin.into_inner(), AdminAdapter::init(&db)).await {
            Ok(res) => response_200(res),
            Err(e) => response_from_use_case_error(e),
        },
        None => response_401(),
    }
}
