use actix_web::{http, test};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::sermons::types::SermonVisible;
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn published_newest_first() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let older = factory::sermon()
        .preached_on(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())
        .insert(&db)
        .await?;
    let newer = factory::sermon()
        .preached_on(NaiveDate::from_ymd_opt(2025, 2, 2).unwrap())
        .insert(&db)
        .await?;
    let _draft = factory::sermon().is_published(false).insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/sermons").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Vec<SermonVisible>> = test::read_body_json(res).await;
    let ids: Vec<_> = res.data.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

#[actix_web::test]
async fn filter_by_series_and_speaker() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let acts = factory::sermon()
        .series("Acts")
        .speaker("Priscilla")
        .insert(&db)
        .await?;
    factory::sermon().series("Acts").insert(&db).await?;
    factory::sermon().speaker("Priscilla").insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/sermons?series=Acts&speaker=Priscilla")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Vec<SermonVisible>> = test::read_body_json(res).await;
    assert_eq!(res.data.len(), 1);
    assert_eq!(res.data[0].id, acts.id);

    Ok(())
}
