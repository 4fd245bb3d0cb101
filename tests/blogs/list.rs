use actix_web::{http, test, HttpMessage};
use chrono::{Duration, Utc};
use entities::sea_orm_active_enums::AdminRole;
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::{blogs::types::BlogVisible, Paginated};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn lists_published_newest_first() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let author = factory::admin().insert(&db).await?;
    let now = Utc::now();
    let older = factory::blog(author.id)
        .published_at((now - Duration::days(2)).into())
        .insert(&db)
        .await?;
    let newer = factory::blog(author.id)
        .published_at((now - Duration::days(1)).into())
        .insert(&db)
        .await?;
    let _draft = factory::blog(author.id).insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/blog").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Paginated<BlogVisible>> = test::read_body_json(res).await;
    let ids: Vec<_> = res.data.items.iter().map(|blog| blog.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(res.data.total, 2);
    assert_eq!(res.data.page, 1);
    assert_eq!(res.data.total_pages, 1);

    Ok(())
}

#[actix_web::test]
async fn filters_by_category_and_paginates() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let author = factory::admin().insert(&db).await?;
    for _ in 0..3 {
        factory::blog(author.id)
            .published()
            .category("Missions")
            .insert(&db)
            .await?;
    }
    factory::blog(author.id)
        .published()
        .category("Youth")
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/blog?category=Missions&page=2&limit=2")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Paginated<BlogVisible>> = test::read_body_json(res).await;
    assert_eq!(res.data.items.len(), 1);
    assert_eq!(res.data.total, 3);
    assert_eq!(res.data.total_pages, 2);
    assert!(res.data.items.iter().all(|blog| blog.category == "Missions"));

    Ok(())
}

#[actix_web::test]
async fn admin_listing_includes_drafts() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    factory::blog(editor.id).insert(&db).await?;
    factory::blog(editor.id).published().insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/blog/admin/all").to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Paginated<BlogVisible>> = test::read_body_json(res).await;
    assert_eq!(res.data.total, 2);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_admin_listing_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get().uri("/api/blog/admin/all").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
