mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn prayer_request_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/prayer-requests")
            .service(create::create_prayer_request_endpoint)
            .service(list::list_public_prayer_requests_endpoint)
            .service(list::list_prayer_requests_endpoint)
            .service(update::update_prayer_request_endpoint)
            .service(delete::delete_prayer_request_endpoint),
    );
}
