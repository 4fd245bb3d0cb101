use db_adapters::{
    event_adapter::{EventAdapter, EventQuery},
    event_registration_adapter::{
        EventRegistrationAdapter, EventRegistrationFilter, EventRegistrationOrder,
        EventRegistrationQuery,
    },
    Order::Asc,
};
use entities::admin;
use uuid::Uuid;

use crate::{
    error_500, event_registrations::types::EventRegistrationVisible, require_role, UseCaseError,
    EDITOR_OR_ABOVE,
};

pub async fn list_event_registrations<'a>(
    admin: admin::Model,
    event_id: Uuid,
    event_adapter: EventAdapter<'a>,
    event_registration_adapter: EventRegistrationAdapter<'a>,
) -> Result<Vec<EventRegistrationVisible>, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let event = event_adapter
        .get_by_id(event_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Event with this id was not found".to_string(),
        ))?;

    event_registration_adapter
        .filter_eq_event(&event)
        .order_by_created_at(Asc)
        .get_all()
        .await
        .map(|registrations| {
            registrations
                .into_iter()
                .map(EventRegistrationVisible::from)
                .collect()
        })
        .map_err(error_500)
}
