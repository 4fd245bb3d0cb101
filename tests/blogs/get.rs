use actix_web::{http, test};
use entities::blog;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::blogs::types::BlogVisible;
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn reading_increments_views() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let author = factory::admin().insert(&db).await?;
    let blog = factory::blog(author.id)
        .published()
        .views(41)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/blog/{}", blog.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<BlogVisible> = test::read_body_json(res).await;
    assert!(res.success);
    assert_eq!(res.data.id, blog.id);
    assert_eq!(res.data.views, 42);

    let blog_in_db = blog::Entity::find_by_id(blog.id).one(&db).await?.unwrap();
    assert_eq!(blog_in_db.views, 42);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_draft() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let author = factory::admin().insert(&db).await?;
    let blog = factory::blog(author.id).views(3).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/blog/{}", blog.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    let blog_in_db = blog::Entity::find_by_id(blog.id).one(&db).await?.unwrap();
    assert_eq!(blog_in_db.views, 3);

    Ok(())
}
