pub mod admin_adapter;
pub mod blog_adapter;
pub mod donation_adapter;
pub mod event_adapter;
pub mod event_registration_adapter;
pub mod prayer_request_adapter;
pub mod sermon_adapter;
pub mod service_schedule_adapter;

use core::fmt;
use sea_orm::{DbErr, SqlErr};
pub use sea_orm::Order;

#[derive(Debug, PartialEq)]
pub enum CustomDbErr {
    Duplicate,
    NotFound,
    Unimplemented,
}

impl fmt::Display for CustomDbErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomDbErr::Duplicate => write!(f, "Duplicate"),
            CustomDbErr::NotFound => write!(f, "NotFound"),
            CustomDbErr::Unimplemented => write!(f, "Unimplemented"),
        }
    }
}

impl std::str::FromStr for CustomDbErr {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Duplicate" => Ok(CustomDbErr::Duplicate),
            "NotFound" => Ok(CustomDbErr::NotFound),
            _ => Ok(CustomDbErr::Unimplemented),
        }
    }
}

impl From<&String> for CustomDbErr {
    fn from(value: &String) -> Self {
        value.parse().unwrap_or(CustomDbErr::Unimplemented)
    }
}

/// Unique-constraint failures become `DbErr::Custom("Duplicate")` on every backend.
pub(crate) fn map_unique_violation(e: DbErr) -> DbErr {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DbErr::Custom(CustomDbErr::Duplicate.to_string())
        }
        _ => e,
    }
}

pub fn is_duplicate(e: &DbErr) -> bool {
    match e {
        DbErr::Custom(message) => CustomDbErr::from(message) == CustomDbErr::Duplicate,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageParams {
    /// 1-based.
    pub page: u64,
    pub limit: u64,
}

impl PageParams {
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const MAX_LIMIT: u64 = 100;

    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}
