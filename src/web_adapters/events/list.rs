use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::event_adapter::EventAdapter;
use sea_orm::DbConn;
use use_cases::events::{list::list_published_events, types::EventListQuery};

use crate::utils::{response_200, response_from_use_case_error};

#[tracing::instrument(name = "Listing published events", skip(db))]
#[get("")]
pub async fn list_events_endpoint(db: Data<DbConn>, query: Query<EventListQuery>) -> HttpResponse {
    match list_published_events(query.into_inner(), EventAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}
