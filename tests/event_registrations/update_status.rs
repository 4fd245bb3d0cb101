use actix_web::{http, test, HttpMessage};
use entities::sea_orm_active_enums::{AdminRole, RegistrationStatus};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::event_registrations::types::{
    EventRegistrationStatusUpdateRequest, EventRegistrationVisible,
};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let event = factory::event(editor.id).insert(&db).await?;
    let registration = factory::event_registration(event.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/events/{}/registrations/{}/status",
            event.id, registration.id
        ))
        .set_json(EventRegistrationStatusUpdateRequest {
            status: RegistrationStatus::Attended,
        })
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<EventRegistrationVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.status, RegistrationStatus::Attended);

    Ok(())
}

#[actix_web::test]
async fn not_found_under_another_event() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let event = factory::event(editor.id).insert(&db).await?;
    let other_event = factory::event(editor.id).insert(&db).await?;
    let registration = factory::event_registration(event.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/events/{}/registrations/{}/status",
            other_event.id, registration.id
        ))
        .set_json(EventRegistrationStatusUpdateRequest {
            status: RegistrationStatus::Cancelled,
        })
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
