use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr, Set};
use use_cases::donations::types::DonationReceipt;
use web_adapters::utils::ApiResponse;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let donation = factory::donation()
        .receipt_number("RCP-2024-000042")
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/donations/receipt/RCP-2024-000042")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<DonationReceipt> = test::read_body_json(res).await;
    assert_eq!(res.data.transaction_id, donation.transaction_id);
    assert_eq!(res.data.donor_name, donation.donor_name);
    assert_eq!(res.data.amount, donation.amount);

    Ok(())
}

#[actix_web::test]
async fn hides_donor_name_when_anonymous() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let mut donation = factory::donation().receipt_number("RCP-2024-000043");
    donation.is_anonymous = Set(true);
    donation.insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/donations/receipt/RCP-2024-000043")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: ApiResponse<DonationReceipt> = test::read_body_json(res).await;
    assert_eq!(res.data.donor_name, None);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_receipt() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/donations/receipt/RCP-1999-000001")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
