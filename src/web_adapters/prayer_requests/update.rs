use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::prayer_request_adapter::PrayerRequestAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::prayer_requests::{types::PrayerRequestUpdateRequest, update::update_prayer_request};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    prayer_request_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a prayer request", skip(db, admin))]
#[put("/{prayer_request_id}")]
pub async fn update_prayer_request_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<PrayerRequestUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_prayer_request(
                admin.into_inner(),
                req.into_inner(),
                path_param.prayer_request_id,
                PrayerRequestAdapter::init(&db),
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
