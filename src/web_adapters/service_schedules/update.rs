use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::service_schedule_adapter::ServiceScheduleAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::service_schedules::{
    types::ServiceScheduleRequest, update::update_service_schedule,
};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    service_schedule_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a service schedule", skip(db, admin))]
#[put("/{service_schedule_id}")]
pub async fn update_service_schedule_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<ServiceScheduleRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_service_schedule(
                admin.into_inner(),
                req.into_inner(),
                path_param.service_schedule_id,
                ServiceScheduleAdapter::init(&db),
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
