use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::{
    event_adapter::EventAdapter, event_registration_adapter::EventRegistrationAdapter,
};
use sea_orm::DbConn;
use use_cases::events::get::get_published_event;

use crate::utils::{response_200, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    event_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting an event", skip(db))]
#[get("/{event_id}")]
pub async fn get_event_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_published_event(
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
