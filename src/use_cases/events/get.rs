use db_adapters::{
    event_adapter::{EventAdapter, EventFilter, EventQuery},
    event_registration_adapter::{
        EventRegistrationAdapter, EventRegistrationFilter, EventRegistrationQuery,
    },
};
use entities::sea_orm_active_enums::RegistrationStatus;
use uuid::Uuid;

use crate::{
    error_500,
    events::types::{EventVisible, EventWithRegistrationCount},
    UseCaseError,
};

pub async fn get_published_event<'a>(
    event_id: Uuid,
    event_adapter: EventAdapter<'a>,
    event_registration_adapter: EventRegistrationAdapter<'a>,
) -> Result<EventWithRegistrationCount, UseCaseError> {
    let event = event_adapter
        .filter_eq_is_published(true)
        .get_by_id(event_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Event with this id was not found".to_string(),
        ))?;

    let registration_count = event_registration_adapter
        .filter_eq_event(&event)
        .filter_ne_status(RegistrationStatus::Cancelled)
        .sum_attendees()
        .await
        .map_err(error_500)?;

    Ok(EventWithRegistrationCount {
        spots_remaining: event
            .max_attendees
            .map(|max| (i64::from(max) - registration_count).max(0)),
        registration_count,
        event: EventVisible::from(event),
    })
}
