use db_adapters::event_registration_adapter::{
    EventRegistrationAdapter, EventRegistrationMutation, EventRegistrationQuery,
};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, ADMIN_OR_ABOVE};

pub async fn delete_event_registration<'a>(
    admin: admin::Model,
    event_id: Uuid,
    registration_id: Uuid,
    event_registration_adapter: EventRegistrationAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
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
        .delete(registration)
        .await
        .map_err(error_500)
}
