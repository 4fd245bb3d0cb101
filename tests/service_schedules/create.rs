use actix_web::{http, test, HttpMessage};
use chrono::NaiveTime;
use entities::{sea_orm_active_enums::AdminRole, service_schedule};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::service_schedules::types::{ServiceScheduleRequest, ServiceScheduleVisible};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

fn request(day_of_week: i16) -> ServiceScheduleRequest {
    ServiceScheduleRequest {
        title: "Midweek prayer".to_string(),
        day_of_week,
        start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        end_time: Some(NaiveTime::from_hms_opt(20, 0, 0).unwrap()),
        location: "Chapel".to_string(),
        description: None,
        is_active: None,
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/service-schedules")
        .set_json(request(3))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let res: ApiResponse<ServiceScheduleVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.day_of_week, 3);
    assert!(res.data.is_active);

    let schedule_in_db = service_schedule::Entity::find_by_id(res.data.id)
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(schedule_in_db.location, "Chapel");

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_invalid_day() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/service-schedules")
        .set_json(request(7))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_editor() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/service-schedules")
        .set_json(request(3))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}

#[actix_web::test]
async fn database_rejects_out_of_range_day() -> Result<(), DbErr> {
    let Connections { db, .. } = init_app().await?;

    let res = factory::service_schedule().day_of_week(7).insert(&db).await;
    assert!(res.is_err());

    let schedule = factory::service_schedule().day_of_week(6).insert(&db).await?;
    assert_eq!(schedule.day_of_week, 6);

    Ok(())
}
