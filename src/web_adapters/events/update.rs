use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::event_adapter::EventAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::events::{types::EventRequest, update::update_event};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    event_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating an event", skip(db, admin))]
#[put("/{event_id}")]
pub async fn update_event_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<EventRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_event(
                admin.into_inner(),
                req.into_inner(),
                path_param.event_id,
                EventAdapter::init(&db),
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
