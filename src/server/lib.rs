use actix_files::Files;
use actix_web::{
    web::{scope, JsonConfig, QueryConfig},
    Scope,
};
use common::settings::types::Settings;
use web_adapters::{
    admin_routes, blog_routes, donation_routes, event_routes, prayer_request_routes,
    service_schedule_routes, sermon_routes, upload_routes,
    utils::{json_error_handler, query_error_handler},
};

pub fn get_routes() -> Scope {
    scope("/api")
        .app_data(JsonConfig::default().error_handler(json_error_handler))
        .app_data(QueryConfig::default().error_handler(query_error_handler))
        .service(health_check)
        .configure(admin_routes)
        .configure(blog_routes)
        .configure(event_routes)
        .configure(donation_routes)
        .configure(prayer_request_routes)
        .configure(service_schedule_routes)
        .configure(sermon_routes)
        .configure(upload_routes)
}

/// Serves stored uploads at `/uploads/{images|videos}/{filename}`.
pub fn get_upload_files(settings: &Settings) -> Files {
    Files::new("/uploads", &settings.upload.dir)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
