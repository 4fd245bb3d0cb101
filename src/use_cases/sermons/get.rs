use db_adapters::sermon_adapter::{SermonAdapter, SermonFilter, SermonQuery};
use uuid::Uuid;

use crate::{error_500, sermons::types::SermonVisible, UseCaseError};

pub async fn get_published_sermon<'a>(
    sermon_id: Uuid,
    sermon_adapter: SermonAdapter<'a>,
) -> Result<SermonVisible, UseCaseError> {
    sermon_adapter
        .filter_eq_is_published(true)
        .get_by_id(sermon_id)
        .await
        .map_err(error_500)?
        .map(SermonVisible::from)
        .ok_or(UseCaseError::NotFound(
            "Sermon with this id was not found".to_string(),
        ))
}
