use std::fmt::Debug;

use db_adapters::{
    admin_adapter::{AdminAdapter, AdminMutation, AdminQuery, CreateAdminParams},
    is_duplicate,
};
use entities::{admin, sea_orm_active_enums::AdminRole};

use crate::{
    admins::types::{AdminRegisterRequest, AdminVisible, MIN_PASSWORD_LENGTH},
    error_500, require_not_blank, require_role, validate_email, UseCaseError, SUPER_ADMIN_ONLY,
};

/// The very first admin may register without credentials and always becomes SuperAdmin.
pub async fn register_admin<'a, H, E>(
    current_admin: Option<admin::Model>,
    params: AdminRegisterRequest,
    hash_password: H,
    admin_adapter: AdminAdapter<'a>,
) -> Result<AdminVisible, UseCaseError>
where
    H: FnOnce(&[u8]) -> Result<String, E>,
    E: Debug,
{
    let admin_count = admin_adapter.clone().count().await.map_err(error_500)?;
    let role = match (admin_count, current_admin) {
        (0, _) => AdminRole::SuperAdmin,
        (_, None) => return Err(UseCaseError::Unauthorized),
        (_, Some(current_admin)) => {
            require_role(&current_admin, SUPER_ADMIN_ONLY)?;
            params.role.unwrap_or(AdminRole::Editor)
        }
    };

    require_not_blank(&params.username, "Username")?;
    require_not_blank(&params.first_name, "First name")?;
    require_not_blank(&params.last_name, "Last name")?;
    let email = params.email.trim().to_lowercase();
    validate_email(&email)?;
    if params.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UseCaseError::BadRequest(format!(
            "Password must be at least {} characters long.",
            MIN_PASSWORD_LENGTH
        )));
    }

    let hashed_password = hash_password(params.password.as_bytes()).map_err(error_500)?;
    match admin_adapter
        .create(CreateAdminParams {
            username: params.username.trim().to_string(),
            email,
            password: hashed_password,
            first_name: params.first_name.trim().to_string(),
            last_name: params.last_name.trim().to_string(),
            role,
        })
        .await
    {
        Ok(admin) => Ok(AdminVisible::from(admin)),
        Err(e) if is_duplicate(&e) => Err(UseCaseError::Conflict(
            "An admin with this email or username already exists.".to_string(),
        )),
        Err(e) => Err(error_500(e)),
    }
}
