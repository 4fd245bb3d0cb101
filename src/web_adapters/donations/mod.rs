mod create;
mod delete;
mod get;
mod list;
mod summary;
mod update_status;

use actix_web::web::{scope, ServiceConfig};

pub fn donation_routes(cfg: &mut ServiceConfig) {
    // Fixed paths before "/{donation_id}".
    cfg.service(
        scope("/donations")
            .service(create::create_donation_endpoint)
            .service(list::list_donations_endpoint)
            .service(summary::summarize_donations_endpoint)
            .service(get::get_donation_receipt_endpoint)
            .service(get::get_donation_endpoint)
            .service(update_status::update_donation_status_endpoint)
            .service(delete::delete_donation_endpoint),
    );
}
