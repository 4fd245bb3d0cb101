use actix_web::{http, test, HttpMessage};
use entities::sea_orm_active_enums::{AdminRole, BlogStatus};
use sea_orm::{ActiveModelTrait, DbErr, Set};
use use_cases::blogs::types::{BlogUpdateRequest, BlogVisible};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn publishing_sets_published_at() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let blog = factory::blog(editor.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/blog/{}", blog.id))
        .set_json(BlogUpdateRequest {
            status: Some(BlogStatus::Published),
            ..Default::default()
        })
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<BlogVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.status, BlogStatus::Published);
    assert!(res.data.published_at.is_some());
    assert_eq!(res.data.title, blog.title);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_blog() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/blog/{}", uuid::Uuid::now_v7()))
        .set_json(BlogUpdateRequest::default())
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn null_clears_excerpt_and_missing_keeps_image() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let mut blog = factory::blog(editor.id);
    blog.excerpt = Set(Some("A short summary.".to_string()));
    blog.featured_image = Set(Some("/uploads/cover.jpg".to_string()));
    let blog = blog.insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/blog/{}", blog.id))
        .set_json(serde_json::json!({ "excerpt": null }))
        .to_request();
    req.extensions_mut().insert(editor.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<BlogVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.excerpt, None);
    assert_eq!(res.data.featured_image, Some("/uploads/cover.jpg".to_string()));

    let req = test::TestRequest::put()
        .uri(&format!("/api/blog/{}", blog.id))
        .set_json(BlogUpdateRequest {
            featured_image: Some(None),
            ..Default::default()
        })
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<BlogVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.featured_image, None);

    Ok(())
}
