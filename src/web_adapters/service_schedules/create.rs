use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::service_schedule_adapter::ServiceScheduleAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::service_schedules::{
    create::create_service_schedule, types::ServiceScheduleRequest,
};

use crate::utils::{response_201, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Creating a service schedule", skip(db, admin))]
#[post("")]
pub async fn create_service_schedule_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<ServiceScheduleRequest>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match create_service_schedule(
                admin.into_inner(),
                req.into_inner(),
                ServiceScheduleAdapter::init(&db),
            )
            .await
            {
                Ok(res) => response_201(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
