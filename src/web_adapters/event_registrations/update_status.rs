use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::event_registration_adapter::EventRegistrationAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::event_registrations::{
    types::EventRegistrationStatusUpdateRequest, update_status::update_event_registration_status,
};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    event_id: uuid::Uuid,
    registration_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating an event registration's status", skip(db, admin))]
#[put("/{registration_id}/status")]
pub async fn update_event_registration_status_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<EventRegistrationStatusUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_event_registration_status(
                admin.into_inner(),
                req.into_inner(),
                path_param.event_id,
                path_param.registration_id,
                EventRegistrationAdapter::init(&db),
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
