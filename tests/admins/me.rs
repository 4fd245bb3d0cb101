use actix_web::{http, test, HttpMessage};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::admins::types::AdminVisible;
use web_adapters::utils::{auth::token::issue_token, ApiResponse};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/admin/me").to_request();
    req.extensions_mut().insert(admin.clone());
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<AdminVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.id, admin.id);
    assert_eq!(res.data.email, admin.email);
    assert_eq!(res.data.role, admin.role);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get().uri("/api/admin/me").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_with_token_of_deactivated_admin() -> Result<(), DbErr> {
    let Connections { app, db, settings } = init_app().await?;
    let admin = factory::admin().is_active(false).insert(&db).await?;
    let token = issue_token(&admin, &settings.secret).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/admin/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_with_garbage_token() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/admin/me")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
