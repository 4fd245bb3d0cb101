mod delete;
mod list;
mod login;
mod me;
mod password_change;
mod register;
pub mod types;
mod update;

use actix_web::web::{scope, ServiceConfig};

pub fn admin_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/admin")
            .service(login::login_endpoint)
            .service(register::register_admin_endpoint)
            .service(me::get_me_endpoint)
            .service(password_change::change_password_endpoint)
            .service(list::list_admins_endpoint)
            .service(update::update_admin_endpoint)
            .service(delete::delete_admin_endpoint),
    );
}
