use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::admin_adapter::AdminAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::admins::{register::register_admin, types::AdminRegisterRequest};

use crate::utils::{auth::password::hash, response_201, response_from_use_case_error};

#[tracing::instrument(name = "Registering an admin", skip(db, admin, req), fields(admin_email = &req.email))]
#[post("/register")]
pub async fn register_admin_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<AdminRegisterRequest>,
) -> HttpResponse {
    match register_admin(
        admin.map(|admin| admin.into_inner()),
        req.into_inner(),
        hash,
        AdminAdapter::init(&db),
    )
    .await
    {
        Ok(res) => response_201(res),
        Err(e) => response_from_use_case_error(e),
    }
}
