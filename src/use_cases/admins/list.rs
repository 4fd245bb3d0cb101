use db_adapters::{
    admin_adapter::{AdminAdapter, AdminOrder, AdminQuery},
    Order::Asc,
};
use entities::admin;

use crate::{admins::types::AdminVisible, error_500, require_role, UseCaseError, SUPER_ADMIN_ONLY};

pub async fn list_admins<'a>(
    admin: admin::Model,
    admin_adapter: AdminAdapter<'a>,
) -> Result<Vec<AdminVisible>, UseCaseError> {
    require_role(&admin, SUPER_ADMIN_ONLY)?;
    admin_adapter
        .order_by_created_at(Asc)
        .get_all()
        .await
        .map(|admins| admins.into_iter().map(AdminVisible::from).collect())
        .map_err(error_500)
}
