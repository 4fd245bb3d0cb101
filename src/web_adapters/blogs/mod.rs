mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn blog_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/blog")
            .service(list::list_published_blogs_endpoint)
            .service(list::list_all_blogs_endpoint)
            .service(get::get_blog_endpoint)
            .service(create::create_blog_endpoint)
            .service(update::update_blog_endpoint)
            .service(delete::delete_blog_endpoint),
    );
}
