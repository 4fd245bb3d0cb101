use actix_web::{http, test};
use entities::{admin, sea_orm_active_enums::AdminRole};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::admins::types::AdminVisible;
use web_adapters::{
    admin_types::{LoginRequest, LoginResponse},
    utils::ApiResponse,
};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn login_then_use_token() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(LoginRequest {
            email: admin.email.to_uppercase(),
            password: "password".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<LoginResponse> = test::read_body_json(res).await;
    assert!(res.success);
    assert_eq!(res.data.admin.id, admin.id);
    assert_eq!(res.data.admin.role, AdminRole::Editor);

    let admin_in_db = admin::Entity::find_by_id(admin.id).one(&db).await?.unwrap();
    assert!(admin_in_db.last_login_at.is_some());

    let req = test::TestRequest::get()
        .uri("/api/admin/me")
        .insert_header(("Authorization", format!("Bearer {}", res.data.token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<AdminVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.id, admin.id);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_on_wrong_password() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(LoginRequest {
            email: admin.email.clone(),
            password: "not-the-password".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_on_unknown_email() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "password".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn forbidden_if_deactivated() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().is_active(false).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(LoginRequest {
            email: admin.email.clone(),
            password: "password".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_malformed_body() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(serde_json::json!({ "email": "someone@example.com" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
