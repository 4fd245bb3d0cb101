use actix_web::{
    get,
    web::{Data, Query, ReqData},
    HttpResponse,
};
use db_adapters::donation_adapter::DonationAdapter;
use entities::admin;
use sea_orm::DbConn;
use use_cases::donations::{list::list_donations, types::DonationListQuery};

use crate::utils::{response_200, response_401, response_from_use_case_error};

#[tracing::instrument(name = "Listing donations", skip(db, admin))]
#[get("")]
pub async fn list_donations_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    query: Query<DonationListQuery>,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            match list_donations(
                admin.into_inner(),
                query.into_inner(),
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
