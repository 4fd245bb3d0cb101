mod create;
mod delete;
mod list;
mod update_status;

use actix_web::web::{scope, ServiceConfig};

/// Mounted inside the `/events` scope.
pub fn event_registration_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/{event_id}/registrations")
            .service(create::register_for_event_endpoint)
            .service(list::list_event_registrations_endpoint)
            .service(update_status::update_event_registration_status_endpoint)
            .service(delete::delete_event_registration_endpoint),
    );
}
