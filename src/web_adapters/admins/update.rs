use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::admin_adapter::AdminAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::admins::{types::AdminUpdateRequest, update::update_admin};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    admin_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating an admin", skip(db, admin))]
#[put("/{admin_id}")]
pub async fn update_admin_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<AdminUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_admin(
                admin.into_inner(),
                req.into_inner(),
                path_param.admin_id,
                AdminAdapter::init(&db),
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
