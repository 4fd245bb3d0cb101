mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn service_schedule_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/service-schedules")
            .service(list::list_active_service_schedules_endpoint)
            .service(list::list_all_service_schedules_endpoint)
            .service(create::create_service_schedule_endpoint)
            .service(update::update_service_schedule_endpoint)
            .service(delete::delete_service_schedule_endpoint),
    );
}
