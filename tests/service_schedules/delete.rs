use actix_web::{http, test, HttpMessage};
use entities::{sea_orm_active_enums::AdminRole, service_schedule};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;
    let schedule = factory::service_schedule().insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/service-schedules/{}", schedule.id))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

    let schedule_in_db = service_schedule::Entity::find_by_id(schedule.id)
        .one(&db)
        .await?;
    assert!(schedule_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_id() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/service-schedules/{}", Uuid::now_v7()))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
