use db_adapters::sermon_adapter::{SermonAdapter, SermonMutation, SermonQuery};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, ADMIN_OR_ABOVE};

pub async fn delete_sermon<'a>(
    admin: admin::Model,
    sermon_id: Uuid,
    sermon_adapter: SermonAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let sermon = sermon_adapter
        .clone()
        .get_by_id(sermon_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Sermon with this id was not found".to_string(),
        ))?;
    sermon_adapter.delete(sermon).await.map_err(error_500)
}
