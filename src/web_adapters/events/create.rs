use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::event_adapter::EventAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::events::{create::create_event, types::EventRequest};

use crate::utils::{response_201, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Creating an event", skip(db, admin))]
#[post("")]
pub async fn create_event_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<EventRequest>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match create_event(admin.into_inner(), req.into_inner(), EventAdapter::init(&db)).await
            {
                Ok(res) => response_201(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
