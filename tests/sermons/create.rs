use actix_web::{http, test, HttpMessage};
use chrono::NaiveDate;
use entities::{sea_orm_active_enums::AdminRole, sermon};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::sermons::types::{SermonRequest, SermonVisible};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

fn request(speaker: &str) -> SermonRequest {
    SermonRequest {
        title: "Bread of life".to_string(),
        speaker: speaker.to_string(),
        preached_on: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        scripture: Some("John 6:35".to_string()),
        description: None,
        series: Some("I Am".to_string()),
        video_url: Some("https://video.example.com/bread".to_string()),
        audio_url: None,
        thumbnail_url: None,
        is_published: None,
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/sermons")
        .set_json(request("Pastor Silas"))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let res: ApiResponse<SermonVisible> = test::read_body_json(res).await;
    let sermon_in_db = sermon::Entity::find_by_id(res.data.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(sermon_in_db.speaker, "Pastor Silas");
    assert_eq!(sermon_in_db.series, Some("I Am".to_string()));
    assert!(res.data.is_published);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_blank_speaker() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/sermons")
        .set_json(request(" "))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
