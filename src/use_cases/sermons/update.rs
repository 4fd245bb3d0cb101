use db_adapters::sermon_adapter::{SermonAdapter, SermonMutation, SermonParams, SermonQuery};
use entities::admin;
use uuid::Uuid;

use crate::{
    error_500, require_role,
    sermons::types::{SermonRequest, SermonVisible},
    UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn update_sermon<'a>(
    admin: admin::Model,
    params: SermonRequest,
    sermon_id: Uuid,
    sermon_adapter: SermonAdapter<'a>,
) -> Result<SermonVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let params = SermonParams::try_from(params)?;
    let sermon = sermon_adapter
        .clone()
        .get_by_id(sermon_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Sermon with this id was not found".to_string(),
        ))?;
    sermon_adapter
        .update(sermon, params)
        .await
        .map(SermonVisible::from)
        .map_err(error_500)
}
