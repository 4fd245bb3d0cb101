use actix_web::{http, test, HttpMessage};
use chrono::{DateTime, Duration, FixedOffset, Utc};
use entities::{event, sea_orm_active_enums::AdminRole};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::events::types::{EventRequest, EventVisible};
use uuid::Uuid;
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

fn request(start_at: DateTime<FixedOffset>, end_at: DateTime<FixedOffset>) -> EventRequest {
    EventRequest {
        title: "Choir rehearsal".to_string(),
        description: "Preparing for the Easter service.".to_string(),
        location: "Music room".to_string(),
        category: Some("Music".to_string()),
        start_at,
        end_at: Some(end_at),
        image_url: None,
        max_attendees: None,
        registration_required: None,
        is_published: Some(false),
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let event = factory::event(editor.id).insert(&db).await?;
    let start_at: DateTime<FixedOffset> = (Utc::now() + Duration::days(3)).into();

    let req = test::TestRequest::put()
        .uri(&format!("/api/events/{}", event.id))
        .set_json(request(start_at, start_at + Duration::hours(2)))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<EventVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.id, event.id);
    assert_eq!(res.data.title, "Choir rehearsal");
    assert_eq!(res.data.category, "Music");
    assert!(!res.data.is_published);

    let event_in_db = event::Entity::find_by_id(event.id).one(&db).await?.unwrap();
    assert_eq!(event_in_db.location, "Music room");
    assert_eq!(event_in_db.max_attendees, None);

    Ok(())
}

#[actix_web::test]
async fn bad_request_when_end_before_start() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let event = factory::event(editor.id).insert(&db).await?;
    let start_at: DateTime<FixedOffset> = (Utc::now() + Duration::days(3)).into();

    let req = test::TestRequest::put()
        .uri(&format!("/api/events/{}", event.id))
        .set_json(request(start_at, start_at - Duration::hours(1)))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let event_in_db = event::Entity::find_by_id(event.id).one(&db).await?.unwrap();
    assert_eq!(event_in_db.title, event.title);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_id() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let start_at: DateTime<FixedOffset> = (Utc::now() + Duration::days(3)).into();

    let req = test::TestRequest::put()
        .uri(&format!("/api/events/{}", Uuid::now_v7()))
        .set_json(request(start_at, start_at + Duration::hours(2)))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_without_admin() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().insert(&db).await?;
    let event = factory::event(admin.id).insert(&db).await?;
    let start_at: DateTime<FixedOffset> = (Utc::now() + Duration::days(3)).into();

    let req = test::TestRequest::put()
        .uri(&format!("/api/events/{}", event.id))
        .set_json(request(start_at, start_at + Duration::hours(2)))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
