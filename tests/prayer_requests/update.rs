use actix_web::{http, test, HttpMessage};
use entities::{
    prayer_request,
    sea_orm_active_enums::{AdminRole, PrayerRequestStatus},
};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::prayer_requests::types::{PrayerRequestUpdateRequest, PrayerRequestVisible};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let prayer_request = factory::prayer_request()
        .is_public(true)
        .insert(&db)
        .await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/prayer-requests/{}", prayer_request.id))
        .set_json(PrayerRequestUpdateRequest {
            status: Some(PrayerRequestStatus::Praying),
            is_public: None,
        })
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<PrayerRequestVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.status, PrayerRequestStatus::Praying);
    assert!(res.data.is_public);

    let prayer_request_in_db = prayer_request::Entity::find_by_id(prayer_request.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(prayer_request_in_db.status, PrayerRequestStatus::Praying);

    Ok(())
}
