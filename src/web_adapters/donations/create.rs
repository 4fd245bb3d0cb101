use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::donation_adapter::DonationAdapter;
use sea_orm::DbConn;
use use_cases::donations::{create::create_donation, types::DonationCreateRequest};

use crate::utils::{response_201, response_from_use_case_error};

#[tracing::instrument(name = "Creating a donation", skip(db, req), fields(amount = req.amount))]
#[post("")]
pub async fn create_donation_endpoint(
    db: Data<DbConn>,
    req: Json<DonationCreateRequest>,
) -> HttpResponse {
    match create_donation(req.into_inner(), DonationAdapter::init(&db)).await {
        Ok(res) => response_201(res),
        Err(e) => response_from_use_case_error(e),
    }
}
