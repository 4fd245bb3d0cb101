use std::fmt::Debug;

use db_adapters::PageParams;
use entities::{admin, custom_methods::admin::AdminPermissionTrait, sea_orm_active_enums::AdminRole};
use serde::{Deserialize, Serialize};

pub mod admins;
pub mod blogs;
pub mod donations;
pub mod event_registrations;
pub mod events;
pub mod prayer_requests;
pub mod service_schedules;
pub mod sermons;
pub mod uploads;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    Unauthorized,                // 401
    Forbidden,                   // 403
    NotFound(String),            // 404
    Conflict(String),            // 409
    PayloadTooLarge(String),     // 413
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub(crate) fn new(items: Vec<T>, total: u64, page: PageParams) -> Self {
        Self {
            items,
            total,
            page: page.page,
            limit: page.limit,
            total_pages: total.div_ceil(page.limit),
        }
    }
}

/// Editors write content; Admins also delete it and manage schedules and donations.
pub const EDITOR_OR_ABOVE: &[AdminRole] = &[AdminRole::Editor, AdminRole::Admin];
pub const ADMIN_OR_ABOVE: &[AdminRole] = &[AdminRole::Admin];
pub const SUPER_ADMIN_ONLY: &[AdminRole] = &[];

pub fn require_role(admin: &admin::Model, allowed_roles: &[AdminRole]) -> Result<(), UseCaseError> {
    match admin.has_any_role(allowed_roles) {
        true => Ok(()),
        false => Err(UseCaseError::Forbidden),
    }
}

pub(crate) fn validate_email(email: &str) -> Result<(), UseCaseError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    match valid {
        true => Ok(()),
        false => Err(UseCaseError::BadRequest(format!(
            "'{}' is not a valid email address.",
            email
        ))),
    }
}

pub(crate) fn require_not_blank(value: &str, field: &str) -> Result<(), UseCaseError> {
    match value.trim().is_empty() {
        true => Err(UseCaseError::BadRequest(format!("{} is required.", field))),
        false => Ok(()),
    }
}
