use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::service_schedule_adapter::ServiceScheduleAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::service_schedules::list::{
    list_active_service_schedules, list_all_service_schedules,
};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Listing active service schedules", skip(db))]
#[get("")]
pub async fn list_active_service_schedules_endpoint(db: Data<DbConn>) -> HttpResponse {
    match list_active_service_schedules(ServiceScheduleAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}

#[tracing::instrument(name = "Listing all service schedules", skip(db, admin))]
#[get("/admin/all")]
pub async fn list_all_service_schedules_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match list_all_service_schedules(admin.into_inner(), ServiceScheduleAdapter::init(&db))
                .await
            {
                Ok(res) => response_200(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
