use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::prayer_request_adapter::PrayerRequestAdapter;
use sea_orm::DbConn;
use use_cases::prayer_requests::{
    create::create_prayer_request, types::PrayerRequestCreateRequest,
};

use crate::utils::{response_201, response_from_use_case_error};

#[tracing::instrument(name = "Submitting a prayer request", skip(db, req))]
#[post("")]
pub async fn create_prayer_request_endpoint(
    db: Data<DbConn>,
    req: Json<PrayerRequestCreateRequest>,
) -> HttpResponse {
    match create_prayer_request(req.into_inner(), PrayerRequestAdapter::init(&db)).await {
        Ok(res) => response_201(res),
        Err(e) => response_from_use_case_error(e),
    }
}
