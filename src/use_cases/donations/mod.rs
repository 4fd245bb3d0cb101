pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod receipt;
pub mod summary;
pub mod types;
pub mod update_status;
