use db_adapters::{
    event_adapter::{EventAdapter, EventFilter, EventQuery},
    event_registration_adapter::{
        CreateEventRegistrationParams, EventRegistrationAdapter, EventRegistrationFilter,
        EventRegistrationMutation, EventRegistrationQuery,
    },
    is_duplicate,
};
use entities::sea_orm_active_enums::RegistrationStatus;
use uuid::Uuid;

use crate::{
    error_500,
    event_registrations::types::{EventRegistrationCreateRequest, EventRegistrationVisible},
    require_not_blank, validate_email, UseCaseError,
};

/// Capacity counts attendees of every registration that has not been cancelled.
pub async fn register_for_event<'a>(
    params: EventRegistrationCreateRequest,
    event_id: Uuid,
    event_adapter: EventAdapter<'a>,
    event_registration_adapter: EventRegistrationAdapter<'a>,
) -> Result<EventRegistrationVisible, UseCaseError> {
    let event = event_adapter
        .filter_eq_is_published(true)
        .get_by_id(event_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Event with this id was not found".to_string(),
        ))?;

    require_not_blank(&params.name, "Name")?;
    let email = params.email.trim().to_lowercase();
    validate_email(&email)?;
    let attendees = params.attendees.unwrap_or(1);
    if attendees < 1 {
        return Err(UseCaseError::BadRequest(
            "attendees must be at least 1.".to_string(),
        ));
    }

    if let Some(max_attendees) = event.max_attendees {
        let registered = event_registration_adapter
            .clone()
            .filter_eq_event(&event)
            .filter_ne_status(RegistrationStatus::Cancelled)
            .sum_attendees()
            .await
            .map_err(error_500)?;
        if registered + i64::from(attendees) > i64::from(max_attendees) {
            return Err(UseCaseError::Conflict(format!(
                "This event is full. {} spot(s) remaining.",
                (i64::from(max_attendees) - registered).max(0)
            )));
        }
    }

    match event_registration_adapter
        .create(
            &event,
            CreateEventRegistrationParams {
                name: params.name.trim().to_string(),
                email,
                phone: params.phone,
                attendees,
                notes: params.notes,
            },
        )
        .await
    {
        Ok(registration) => Ok(EventRegistrationVisible::from(registration)),
        Err(e) if is_duplicate(&e) => Err(UseCaseError::Conflict(
            "This email is already registered for the event.".to_string(),
        )),
        Err(e) => Err(error_500(e)),
    }
}
