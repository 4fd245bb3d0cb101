use db_adapters::admin_adapter::{AdminAdapter, AdminMutation, AdminQuery, UpdateAdminParams};
use entities::admin;
use uuid::Uuid;

use crate::{
    admins::types::{AdminUpdateRequest, AdminVisible},
    error_500, require_role, UseCaseError, SUPER_ADMIN_ONLY,
};

pub async fn update_admin<'a>(
    admin: admin::Model,
    params: AdminUpdateRequest,
    admin_id: Uuid,
    admin_adapter: AdminAdapter<'a>,
) -> Result<AdminVisible, UseCaseError> {
    require_role(&admin, SUPER_ADMIN_ONLY)?;
    if admin.id == admin_id && (params.role.is_some() || params.is_active == Some(false)) {
        return Err(UseCaseError::BadRequest(
            "You cannot change your own role or deactivate yourself.".to_string(),
        ));
    }

    let target = admin_adapter
        .clone()
        .get_by_id(admin_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Admin with this id was not found".to_string(),
        ))?;

    admin_adapter
        .partial_update(
            target,
            UpdateAdminParams {
                first_name: params.first_name,
                last_name: params.last_name,
                role: params.role,
                is_active: params.is_active,
            },
        )
        .await
        .map(AdminVisible::from)
        .map_err(error_500)
}
