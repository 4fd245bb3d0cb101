use db_adapters::event_adapter::{EventAdapter, EventMutation, EventParams};
use entities::admin;

use crate::{
    error_500,
    events::types::{EventRequest, EventVisible},
    require_role, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn create_event<'a>(
    admin: admin::Model,
    params: EventRequest,
    event_adapter: EventAdapter<'a>,
) -> Result<EventVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let params = EventParams::try_from(params)?;
    event_adapter
        .create(params, admin.id)
        .await
        .map(EventVisible::from)
        .map_err(error_500)
}
