pub mod delete;
pub mod list;
pub mod register;
pub mod types;
pub mod update;
