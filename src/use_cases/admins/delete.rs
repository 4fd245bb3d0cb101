use db_adapters::admin_adapter::{AdminAdapter, AdminMutation, AdminQuery};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, SUPER_ADMIN_ONLY};

pub async fn delete_admin<'a>(
    admin: admin::Model,
    admin_id: Uuid,
    admin_adapter: AdminAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, SUPER_ADMIN_ONLY)?;
    if admin.id == admin_id {
        return Err(UseCaseError::BadRequest(
            "You cannot delete your own account.".to_string(),
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
    admin_adapter.delete(target).await.map_err(error_500)
}
