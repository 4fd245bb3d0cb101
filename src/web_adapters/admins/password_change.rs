use actix_web::{
    put,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use db_adapters::admin_adapter::{AdminAdapter, AdminMutation};
use entities::admin;
use sea_orm::DbConn;
use use_cases::admins::types::{AdminVisible, MIN_PASSWORD_LENGTH};

use crate::{
    admins::types::PasswordChangeRequest,
    utils::{
        auth::password::{hash, verify_password},
        response_200, response_400, response_401, response_500,
    },
};

#[tracing::instrument(name = "Changing the current admin's password", skip(db, admin, req))]
#[put("/me/password")]
pub async fn change_password_endpoint(
    db: Data<DbConn>,
    admin: Option<ReqData<admin::Model>>,
    req: Json<PasswordChangeRequest>,
) -> HttpResponse {
    let admin = match admin {
        Some(admin) => admin.into_inner(),
        None => return response_401(),
    };
    if verify_password(&admin.password, req.current_password.as_bytes()).is_err() {
        return response_400("Current password is incorrect.");
    }
    if req.new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return response_400(&format!(
            "Password must be at least {} characters long.",
            MIN_PASSWORD_LENGTH
        ));
    }

    let hashed_password = match hash(req.new_password.as_bytes()) {
        Ok(hashed_password) => hashed_password,
        Err(e) => return response_500(e),
    };
    match AdminAdapter::init(&db)
        .update_password(admin, hashed_password)
        .await
    {
        Ok(admin) => response_200(AdminVisible::from(admin)),
        Err(e) => response_500(e),
    }
}
