mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

use crate::event_registrations::event_registration_routes;

/// Registrations live under `/events/{event_id}/registrations`, so they share this scope.
pub fn event_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/events")
            .configure(event_registration_routes)
            .service(list::list_events_endpoint)
            .service(get::get_event_endpoint)
            .service(create::create_event_endpoint)
            .service(update::update_event_endpoint)
            .service(delete::delete_event_endpoint),
    );
}
