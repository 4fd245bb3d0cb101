use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::event_registration_adapter::EventRegistrationAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::event_registrations::delete::delete_event_registration;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    event_id: uuid::Uuid,
    registration_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting an event registration", skip(db, admin))]
#[delete("/{registration_id}")]
pub async fn delete_event_registration_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_event_registration(
                admin.into_inner(),
                path_param.event_id,
                path_param.registration_id,
                EventRegistrationAdapter::init(&db),
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
