use actix_web::{http, test, HttpMessage};
use chrono::NaiveTime;
use entities::sea_orm_active_enums::AdminRole;
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::service_schedules::types::ServiceScheduleVisible;
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn active_schedules_in_weekly_order() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let wednesday = factory::service_schedule()
        .day_of_week(3)
        .insert(&db)
        .await?;
    let sunday_evening = factory::service_schedule()
        .start_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
        .insert(&db)
        .await?;
    let sunday_morning = factory::service_schedule()
        .start_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        .insert(&db)
        .await?;
    let inactive = factory::service_schedule()
        .is_active(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/service-schedules")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Vec<ServiceScheduleVisible>> = test::read_body_json(res).await;
    let ids: Vec<_> = res.data.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![sunday_morning.id, sunday_evening.id, wednesday.id]);
    assert!(!ids.contains(&inactive.id));

    Ok(())
}

#[actix_web::test]
async fn admin_listing_includes_inactive() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    factory::service_schedule().insert(&db).await?;
    let inactive = factory::service_schedule()
        .day_of_week(5)
        .is_active(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/service-schedules/admin/all")
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Vec<ServiceScheduleVisible>> = test::read_body_json(res).await;
    assert_eq!(res.data.len(), 2);
    assert_eq!(res.data[1].id, inactive.id);

    Ok(())
}
