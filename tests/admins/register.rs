use actix_web::{http, test, HttpMessage};
use entities::{admin, sea_orm_active_enums::AdminRole};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::admins::types::{AdminRegisterRequest, AdminVisible};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

fn request(email: &str, role: Option<AdminRole>) -> AdminRegisterRequest {
    AdminRegisterRequest {
        username: email.replace(['@', '.'], "_"),
        email: email.to_string(),
        password: "a-strong-password".to_string(),
        first_name: "Priscilla".to_string(),
        last_name: "Aquila".to_string(),
        role,
    }
}

#[actix_web::test]
async fn first_admin_bootstraps_as_super_admin() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/register")
        .set_json(request("first@example.com", Some(AdminRole::Editor)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let res: ApiResponse<AdminVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.role, AdminRole::SuperAdmin);

    let admin_in_db = admin::Entity::find_by_id(res.data.id).one(&db).await?.unwrap();
    assert!(admin_in_db.password.starts_with("$argon2id$"));

    let req = test::TestRequest::post()
        .uri("/api/admin/register")
        .set_json(request("second@example.com", None))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn super_admin_registers_with_role() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let super_admin = factory::admin()
        .role(AdminRole::SuperAdmin)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/register")
        .set_json(request("editor@example.com", Some(AdminRole::Admin)))
        .to_request();
    req.extensions_mut().insert(super_admin.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let res: ApiResponse<AdminVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.role, AdminRole::Admin);

    let req = test::TestRequest::post()
        .uri("/api/admin/register")
        .set_json(request("editor@example.com", None))
        .to_request();
    req.extensions_mut().insert(super_admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CONFLICT);

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_admin_role() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/admin/register")
        .set_json(request("someone@example.com", None))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_short_password() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;
    let mut body = request("short@example.com", None);
    body.password = "short".to_string();

    let req = test::TestRequest::post()
        .uri("/api/admin/register")
        .set_json(body)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
