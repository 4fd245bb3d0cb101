mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn sermon_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/sermons")
            .service(list::list_sermons_endpoint)
            .service(get::get_sermon_endpoint)
            .service(create::create_sermon_endpoint)
            .service(update::update_sermon_endpoint)
            .service(delete::delete_sermon_endpoint),
    );
}
