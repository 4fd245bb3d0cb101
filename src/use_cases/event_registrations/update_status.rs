use db_adapters::event_registration_adapter::{
    EventRegistrationAdapter, EventRegistrationMutation, EventRegistrationQuery,
};
use entities::admin;
use uuid::Uuid;

use crate::{
    error_500,
    event_registrations::types::{EventRegistrationStatusUpdateRequest, EventRegistrationVisible},
    require_role, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn update_event_registration_status<'a>(
    admin: admin::Model,
    params: EventRegistrationStatusUpdateRequest,
    event_id: Uuid,
    registration_id: Uuid,
    event_registration_adapter: EventRegistrationAdapter<'a>,
) -> Result<EventRegistrationVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let registration = event_registration_adapter
        .clone()
        .get_by_id(registration_id)
        .await
        .map_err(error_500)?
        .filter(|registration| registration.event_id == event_id)
        .ok_or(UseCaseError::NotFound(
            "Registration with this id was not found".to_string(),
        ))?;

    event_registration_adapter
        .update_status(registration, params.status)
        .await
        .map(EventRegistrationVisible::from)
        .map_err(error_500)
}
