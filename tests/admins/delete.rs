use actix_web::{http, test, HttpMessage};
use entities::{admin, sea_orm_active_enums::AdminRole};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let super_admin = factory::admin()
        .role(AdminRole::SuperAdmin)
        .insert(&db)
        .await?;
    let editor = factory::admin().role(AdminRole::Editor).insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/{}", editor.id))
        .to_request();
    req.extensions_mut().insert(super_admin);
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NO_CONTENT);

    let admin_in_db = admin::Entity::find_by_id(editor.id).one(&db).await?;
    assert!(admin_in_db.is_none());

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_deleting_self() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let super_admin = factory::admin()
        .role(AdminRole::SuperAdmin)
        .insert(&db)
        .await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/{}", super_admin.id))
        .to_request();
    req.extensions_mut().insert(super_admin.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let admin_in_db = admin::Entity::find_by_id(super_admin.id).one(&db).await?;
    assert!(admin_in_db.is_some());

    Ok(())
}
