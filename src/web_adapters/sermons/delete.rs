use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::sermon_adapter::SermonAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::sermons::delete::delete_sermon;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    sermon_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a sermon", skip(db, admin))]
#[delete("/{sermon_id}")]
pub async fn delete_sermon_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_sermon(admin.into_inner(), path_param.sermon_id, SermonAdapter::init(&db))
                .await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
