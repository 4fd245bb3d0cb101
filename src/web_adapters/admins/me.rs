use actix_web::{
    get,
    web::ReqData,
    HttpResponse,
};
use entities::admin;
use use_cases::admins::types::AdminVisible;

use crate::utils::{response_200, response_401};

#[tracing::instrument(name = "Getting the current admin", skip(admin))]
#[get("/me")]
pub async fn get_me_endpoint(admin: Option<ReqData<admin::Model>>) -> HttpResponse {
    match admin {
        Some(admin) => response_200(AdminVisible::from(admin.into_inner())),
        None => response_401(),
    }
}
