mod admin;
mod blog;
mod donation;
mod event;
mod event_registration;
mod prayer_request;
mod sermon;
mod service_schedule;

pub use admin::*;
pub use blog::*;
pub use donation::*;
pub use event::*;
pub use event_registration::*;
pub use prayer_request::*;
pub use sermon::*;
pub use service_schedule::*;
