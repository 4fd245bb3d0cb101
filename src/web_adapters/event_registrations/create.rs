use actix_web::{
    post,
    web::{Data, Json, Path},
    HttpResponse,
};
use db_adapters::{
    event_adapter::EventAdapter, event_registration_adapter::EventRegistrationAdapter,
};
use sea_orm::DbConn;
use use_cases::event_registrations::{
    create::register_for_event, types::EventRegistrationCreateRequest,
};

use crate::utils::{response_201, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    event_id: uuid::Uuid,
}

#[tracing::instrument(name = "Registering for an event", skip(db, req))]
#[post("")]
pub async fn register_for_event_endpoint(
    db: Data<DbConn>,
    req: Json<EventRegistrationCreateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match register_for_event(
        req.into_inner(),
        path_param.event_id,
        EventAdapter::init(&db),
        EventRegistrationAdapter::init(&db),
    )
    .await
    {
        Ok(res) => response_201(res),
        Err(e) => response_from_use_case_error(e),
    }
}
