mod admins;
mod blogs;
mod donations;
mod event_registrations;
mod events;
mod middlewares;
mod prayer_requests;
mod service_schedules;
mod sermons;
mod uploads;
pub mod utils;

pub use admins::{admin_routes, types as admin_types};
pub use blogs::blog_routes;
pub use donations::donation_routes;
pub use events::event_routes;
pub use prayer_requests::prayer_request_routes;
pub use service_schedules::service_schedule_routes;
pub use sermons::sermon_routes;
pub use uploads::upload_routes;

pub use middlewares::auth::AuthenticateAdmin;
