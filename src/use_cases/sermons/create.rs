use db_adapters::sermon_adapter::{SermonAdapter, SermonMutation, SermonParams};
use entities::admin;

use crate::{
    error_500, require_role,
    sermons::types::{SermonRequest, SermonVisible},
    UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn create_sermon<'a>(
    admin: admin::Model,
    params: SermonRequest,
    sermon_adapter: SermonAdapter<'a>,
) -> Result<SermonVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let params = SermonParams::try_from(params)?;
    sermon_adapter
        .create(params)
        .await
        .map(SermonVisible::from)
        .map_err(error_500)
}
