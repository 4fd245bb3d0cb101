mod delete;
mod upload;

use actix_web::web::{scope, ServiceConfig};

pub fn upload_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/upload")
            .service(upload::upload_image_endpoint)
            .service(upload::upload_video_endpoint)
            .service(delete::delete_upload_endpoint),
    );
}
