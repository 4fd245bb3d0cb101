use actix_web::{http, test, HttpMessage};
use entities::sea_orm_active_enums::{AdminRole, DonationFund};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::{donations::types::DonationVisible, Paginated};
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;
    let tithe = factory::donation()
        .fund(DonationFund::Tithe)
        .insert(&db)
        .await?;
    factory::donation()
        .fund(DonationFund::Missions)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/donations?fund=Tithe")
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<Paginated<DonationVisible>> = test::read_body_json(res).await;
    assert_eq!(res.data.total, 1);
    assert_eq!(res.data.items.len(), 1);
    assert_eq!(res.data.items[0].id, tithe.id);

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_editor() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/donations").to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}
