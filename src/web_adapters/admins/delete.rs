use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::admin_adapter::AdminAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::admins::delete::delete_admin;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    admin_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting an admin", skip(db, admin))]
#[delete("/{admin_id}")]
pub async fn delete_admin_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_admin(admin.into_inner(), path_param.admin_id, AdminAdapter::init(&db))
                .await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
