use actix_web::{http, test, HttpMessage};
use entities::sea_orm_active_enums::{AdminRole, PrayerRequestStatus};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::prayer_requests::types::{PrayerRequestVisible, PublicPrayerRequest};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn public_wall_hides_private_details() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let named = factory::prayer_request().is_public(true).insert(&db).await?;
    let anonymous = factory::prayer_request()
        .is_public(true)
        .anonymous()
        .insert(&db)
        .await?;
    let _private = factory::prayer_request().insert(&db).await?;
    let _archived = factory::prayer_request()
        .is_public(true)
        .status(PrayerRequestStatus::Archived)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/prayer-requests/public")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Vec<PublicPrayerRequest>> = test::read_body_json(res).await;
    assert_eq!(res.data.len(), 2);
    let named_res = res.data.iter().find(|r| r.id == named.id).unwrap();
    assert_eq!(named_res.name, named.name);
    let anonymous_res = res.data.iter().find(|r| r.id == anonymous.id).unwrap();
    assert_eq!(anonymous_res.name, None);

    Ok(())
}

#[actix_web::test]
async fn editor_can_filter_by_status() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    factory::prayer_request().insert(&db).await?;
    let answered = factory::prayer_request()
        .status(PrayerRequestStatus::Answered)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/prayer-requests?status=Answered")
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Vec<PrayerRequestVisible>> = test::read_body_json(res).await;
    assert_eq!(res.data.len(), 1);
    assert_eq!(res.data[0].id, answered.id);
    assert_eq!(res.data[0].email, answered.email);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/prayer-requests")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
