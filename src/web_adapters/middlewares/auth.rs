use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web::Data,
    Error, HttpMessage,
};
use common::settings::types::Settings;
use db_adapters::admin_adapter::{AdminAdapter, AdminFilter, AdminQuery};
use entities::admin;
use futures::future::LocalBoxFuture;
use sea_orm::DbConn;
use tracing::{event, Level};

use crate::utils::auth::token::decode_token;

/// Resolves `Authorization: Bearer <jwt>` into an active admin and stores it in request extensions.
/// Requests without a usable token pass through anonymously; endpoints decide whether to answer 401.
pub struct AuthenticateAdmin;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateAdminMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateAdminMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateAdminMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            if let Some(admin) = authenticate(&req).await {
                req.extensions_mut().insert(admin);
            }

            let res = svc.call(req).await?;

            Ok(res)
        })
    }
}

async fn authenticate(req: &ServiceRequest) -> Option<admin::Model> {
    let token = bearer_token(req)?;
    let settings = req.app_data::<Data<Settings>>()?;
    let db = req.app_data::<Data<DbConn>>()?;

    let claims = match decode_token(&token, &settings.secret.jwt_secret) {
        Ok(claims) => claims,
        Err(e) => {
            event!(target: "backend", Level::DEBUG, "Rejected bearer token: {:?}", e);
            return None;
        }
    };
    match AdminAdapter::init(db)
        .filter_eq_is_active(true)
        .get_by_id(claims.sub)
        .await
    {
        Ok(admin) => admin,
        Err(e) => {
            event!(target: "backend", Level::ERROR, "Failed to load admin for token: {:?}", e);
            None
        }
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;
    match scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() {
        true => Some(token.trim().to_string()),
        false => None,
    }
}
