use actix_web::{http, test, HttpMessage};
use entities::sea_orm_active_enums::AdminRole;
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::donations::types::DonationVisible;
use uuid::Uuid;
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;
    let donation = factory::donation().amount(25_000).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/donations/{}", donation.id))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<DonationVisible> = test::read_body_json(res).await;
    assert_eq!(res.data.id, donation.id);
    assert_eq!(res.data.amount, 25_000);
    assert_eq!(res.data.receipt_number, donation.receipt_number);
    assert_eq!(res.data.donor_email, donation.donor_email);

    Ok(())
}

#[actix_web::test]
async fn forbidden_for_editor() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;
    let donation = factory::donation().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/donations/{}", donation.id))
        .to_request();
    req.extensions_mut().insert(editor);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::FORBIDDEN);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_id() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let admin = factory::admin().role(AdminRole::Admin).insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/donations/{}", Uuid::now_v7()))
        .to_request();
    req.extensions_mut().insert(admin);
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
