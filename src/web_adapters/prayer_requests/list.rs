use actix_web::{
    get,
    web::{Data, Query, ReqData},
    HttpResponse,
};
use db_adapters::prayer_request_adapter::PrayerRequestAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::prayer_requests::{
    list::{list_prayer_requests, list_public_prayer_requests},
    types::PrayerRequestListQuery,
};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Listing public prayer requests", skip(db))]
#[get("/public")]
pub async fn list_public_prayer_requests_endpoint(db: Data<DbConn>) -> HttpResponse {
    match list_public_prayer_requests(PrayerRequestAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}

#[tracing::instrument(name = "Listing prayer requests", skip(db, admin))]
#[get("")]
pub async fn list_prayer_requests_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    query: Query<PrayerRequestListQuery>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match list_prayer_requests(
                admin.into_inner(),
                query.into_inner(),
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
