use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::service_schedule_adapter::ServiceScheduleAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::service_schedules::delete::delete_service_schedule;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    service_schedule_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a service schedule", skip(db, admin))]
#[delete("/{service_schedule_id}")]
pub async fn delete_service_schedule_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_service_schedule(
                admin.into_inner(),
                path_param.service_schedule_id,
                ServiceScheduleAdapter::init(&db),
            )
            .await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
