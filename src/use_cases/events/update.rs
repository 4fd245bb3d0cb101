use db_adapters::event_adapter::{EventAdapter, EventMutation, EventParams, EventQuery};
use entities::admin;
use uuid::Uuid;

use crate::{
    error_500,
    events::types::{EventRequest, EventVisible},
    require_role, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn update_event<'a>(
    admin: admin::Model,
    params: EventRequest,
    event_id: Uuid,
    event_adapter: EventAdapter<'a>,
) -> Result<EventVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let params = EventParams::try_from(params)?;
    let event = event_adapter
        .clone()
        .get_by_id(event_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Event with this id was not found".to_string(),
        ))?;
    event_adapter
        .update(event, params)
        .await
        .map(EventVisible::from)
        .map_err(error_500)
}
