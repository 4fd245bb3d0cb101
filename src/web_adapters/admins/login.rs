use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::admin_adapter::{AdminAdapter, AdminMutation, AdminQuery};
use sea_orm::DbConn;
use tracing::{event, Level};
use use_cases::admins::types::AdminVisible;

use crate::{
    admins::types::{LoginRequest, LoginResponse},
    utils::{
        auth::{password::verify_password, token::issue_token},
        response_200, response_500, ErrorResponse,
    },
};

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

#[tracing::instrument(name = "Logging an admin in", skip(db, settings, req), fields(admin_email = &req.email))]
#[post("/login")]
pub async fn login_endpoint(
    db: Data<DbConn>,
    settings: Data<Settings>,
    req: Json<LoginRequest>,
) -> HttpResponse {
    let email = req.email.trim().to_lowercase();
    let admin = match AdminAdapter::init(&db).get_by_email(&email).await {
        Ok(Some(admin)) => admin,
        Ok(None) => return invalid_credentials(),
        Err(e) => return response_500(e),
    };
    if verify_password(&admin.password, req.password.as_bytes()).is_err() {
        return invalid_credentials();
    }
    if !admin.is_active {
        return HttpResponse::Forbidden().json(ErrorResponse {
            error: "This account has been deactivated.".to_string(),
        });
    }

    match AdminAdapter::init(&db).touch_last_login(admin).await {
        Ok(admin) => match issue_token(&admin, &settings.secret) {
            Ok(token) => {
                event!(target: "backend", Level::INFO, "Admin logged in successfully.");
                response_200(LoginResponse {
                    token,
                    admin: AdminVisible::from(admin),
                })
            }
            Err(e) => response_500(e),
        },
        Err(e) => response_500(e),
    }
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: INVALID_CREDENTIALS_MESSAGE.to_string(),
    })
}
