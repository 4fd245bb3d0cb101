use actix_web::{http, test, HttpMessage};
use entities::{event_registration, sea_orm_active_enums::AdminRole};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;
    let event = factory::event(admin.id).insert(&db).await?;
    let registration = factory::event_registration(event.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/events/{}/registrations/{}",
            event.id, registration.id
        ))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

    let registration_in_db = event_registration::Entity::find_by_id(registration.id)
        .one(&db)
        .await?;
    assert!(registration_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn not_found_under_another_event() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;
    let event = factory::event(admin.id).insert(&db).await?;
    let other_event = factory::event(admin.id).insert(&db).await?;
    let registration = factory::event_registration(event.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/events/{}/registrations/{}",
            other_event.id, registration.id
        ))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    let registration_in_db = event_registration::Entity::find_by_id(registration.id)
        .one(&db)
        .await?;
    assert!(registration_in_db.is_some());

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_editor() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let event = factory::event(editor.id).insert(&db).await?;
    let registration = factory::event_registration(event.id).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!(
            "/api/events/{}/registrations/{}",
            event.id, registration.id
        ))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}
