use db_adapters::event_adapter::{EventAdapter, EventMutation, EventQuery};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, ADMIN_OR_ABOVE};

/// Registrations go with the event through the cascading foreign key.
pub async fn delete_event<'a>(
    admin: admin::Model,
    event_id: Uuid,
    event_adapter: EventAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let event = event_adapter
        .clone()
        .get_by_id(event_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Event with this id was not found".to_string(),
        ))?;
    event_adapter.delete(event).await.map_err(error_500)
}
