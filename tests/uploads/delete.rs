use std::path::PathBuf;

use actix_web::{http, test, HttpMessage};
use entities::sea_orm_active_enums::AdminRole;
use sea_orm::{ActiveModelTrait, DbErr};
use uuid::Uuid;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, settings } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;
    let dir = PathBuf::from(&settings.upload.dir).join("videos");
    std::fs::create_dir_all(&dir).unwrap();
    let file_name = format!("{}.mp4", Uuid::now_v7());
    std::fs::write(dir.join(&file_name), b"video").unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/upload/videos/{}", file_name))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

    assert!(!dir.join(&file_name).exists());

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_hidden_file_name() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri("/api/upload/images/.env")
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_missing_file() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/upload/images/{}.png", Uuid::now_v7()))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_editor() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/upload/images/{}.png", Uuid::now_v7()))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}
