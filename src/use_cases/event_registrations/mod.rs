pub mod create;
pub mod delete;
pub mod list;
pub mod types;
pub mod update_status;
