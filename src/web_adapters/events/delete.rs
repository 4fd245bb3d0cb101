use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::event_adapter::EventAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::events::delete::delete_event;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    event_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting an event", skip(db, admin))]
#[delete("/{event_id}")]
pub async fn delete_event_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_event(admin.into_inner(), path_param.event_id, EventAdapter::init(&db))
                .await
            {
                Ok(_) => HttpResponse::NoContent().finish(),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
