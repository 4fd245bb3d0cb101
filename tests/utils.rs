use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test,
    web::Data,
    App,
};
use common::{db::init_db, settings::get_test_settings, settings::types::Settings};
use sea_orm::{DbConn, DbErr};
use server::get_routes;
use web_adapters::AuthenticateAdmin;

pub struct Connections<S> {
    pub app: S,
    pub db: DbConn,
    pub settings: Settings,
}

/// Mirrors the App built in church_backend's startup, minus compression and static files.
pub async fn init_app() -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    let settings = get_test_settings();
    let db = init_db(&settings).await?;
    let app = test::init_service(
        App::new()
            .wrap(AuthenticateAdmin)
            .service(get_routes())
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(settings.clone())),
    )
    .await;
    Ok(Connections { app, db, settings })
}
