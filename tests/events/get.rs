use actix_web::{http, test};
use entities::sea_orm_active_enums::RegistrationStatus;
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::events::types::EventWithRegistrationCount;
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn includes_registration_count() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().insert(&db).await?;
    let event = factory::event(admin.id).max_attendees(10).insert(&db).await?;
    factory::event_registration(event.id)
        .attendees(3)
        .insert(&db)
        .await?;
    factory::event_registration(event.id)
        .attendees(4)
        .status(RegistrationStatus::Cancelled)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/events/{}", event.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<EventWithRegistrationCount> = test::read_body_json(res).await;
    assert_eq!(res.data.event.id, event.id);
    assert_eq!(res.data.registration_count, 3);
    assert_eq!(res.data.spots_remaining, Some(7));

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unpublished_event() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().insert(&db).await?;
    let event = factory::event(admin.id)
        .is_published(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/events/{}", event.id))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
