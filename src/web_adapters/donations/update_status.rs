use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::donation_adapter::DonationAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::donations::{
    types::DonationStatusUpdateRequest, update_status::update_donation_status,
};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    donation_id: uuid::Uuid,
}

#[tracing::instrument(name = "Updating a donation's status", skip(db, admin))]
#[put("/{donation_id}/status")]
pub async fn update_donation_status_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<DonationStatusUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match update_donation_status(
                admin.into_inner(),
                req.into_inner(),
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
