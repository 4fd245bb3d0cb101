use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::sermon_adapter::SermonAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::sermons::{types::SermonRequest, update::update_sermon};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    sermon_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a sermon", skip(db, admin))]
#[put("/{sermon_id}")]
pub async fn update_sermon_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<SermonRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_sermon(
                admin.into_inner(),
                req.into_inner(),
                path_param.sermon_id,
                SermonAdapter::init(&db),
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
