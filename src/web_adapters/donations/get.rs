use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::donation_adapter::DonationAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::donations::get::{get_donation, get_donation_receipt};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    donation_id: uuid::Uuid,
}

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct ReceiptPathParam {
    receipt_number: String,
}

#[tracing::instrument(name = "Getting a donation", skip(db, admin))]
#[get("/{donation_id}")]
pub async fn get_donation_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match get_donation(
                admin.into_inner(),
                path_param.donation_id,
                DonationAdapter::init(&db),
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

#[tracing::instrument(name = "Looking up a donation receipt", skip(db))]
#[get("/receipt/{receipt_number}")]
pub async fn get_donation_receipt_endpoint(
    db: Data<DbConn>,
    path_param: Path<ReceiptPathParam>,
) -> HttpResponse {
    match get_donation_receipt(&path_param.receipt_number, DonationAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}
