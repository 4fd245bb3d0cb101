use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::donation_adapter::DonationAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::donations::delete::delete_donation;

use crate::utils::{response_401, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    donation_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a donation", skip(db, admin))]
#[delete("/{donation_id}")]
pub async fn delete_donation_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match delete_donation(
                admin.into_inner(),
                path_param.donation_id,
                DonationAdapter::init(&db),
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
