use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::donation_adapter::DonationAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::donations::summary::summarize_donations;

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Summarizing donations", skip(db, admin))]
#[get("/summary")]
pub async fn summarize_donations_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match summarize_donations(admin.into_inner(), DonationAdapter::init(&db)).await {
                Ok(res) => response_200(res),
                Err(e) => response_from_use_case_error(e),
            }
        }
        None => response_401(),
    }
}
