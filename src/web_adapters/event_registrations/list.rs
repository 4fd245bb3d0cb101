use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::{
    event_adapter::EventAdapter, event_registration_adapter::EventRegistrationAdapter,
};
use entities::admin;
use sea_orm::DbConn;
use use_cases::event_registrations::list::list_event_registrations;

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    event_id: uuid::Uuid,
}

#[tracing::instrument(name = "Listing an event's registrations", skip(db, admin))]
#[get("")]
pub async fn list_event_registrations_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match list_event_registrations(
                admin.into_inner(),
                path_param.event_id,
                EventAdapter::init(&db),
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
