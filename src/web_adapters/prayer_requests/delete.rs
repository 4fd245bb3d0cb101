use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::prayer_request_adapter::PrayerRequestAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::prayer_requests::delete::delete_prayer_request;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    prayer_request_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a prayer request", skip(db, admin))]
#[delete("/{prayer_request_id}")]
pub async fn delete_prayer_request_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_prayer_request(
                admin.into_inner(),
                path_param.prayer_request_id,
                PrayerRequestAdapter::init(&db),
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
