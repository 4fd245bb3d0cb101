use db_adapters::prayer_request_adapter::{
    CreatePrayerRequestParams, PrayerRequestAdapter, PrayerRequestMutation,
};

use crate::{
    error_500,
    prayer_requests::types::{
        PrayerRequestCreateRequest, PrayerRequestVisible, MAX_REQUEST_LENGTH,
    },
    validate_email, UseCaseError,
};

pub async fn create_prayer_request<'a>(
    params: PrayerRequestCreateRequest,
    prayer_request_adapter: PrayerRequestAdapter<'a>,
) -> Result<PrayerRequestVisible, UseCaseError> {
    let request = params.request.trim();
    if request.is_empty() {
        return Err(UseCaseError::BadRequest("request is required.".to_string()));
    }
    if request.chars().count() > MAX_REQUEST_LENGTH {
        return Err(UseCaseError::BadRequest(format!(
            "request must be at most {} characters.",
            MAX_REQUEST_LENGTH
        )));
    }

    let is_anonymous = params.is_anonymous.unwrap_or(false);
    let (name, email) = match is_anonymous {
        true => (None, None),
        false => {
            let email = match params.email.as_deref().map(str::trim) {
                Some(email) if !email.is_empty() => {
                    let email = email.to_lowercase();
                    validate_email(&email)?;
                    Some(email)
                }
                _ => None,
            };
            let name = params
                .name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty());
            (name, email)
        }
    };

    prayer_request_adapter
        .create(CreatePrayerRequestParams {
            name,
            email,
            request: request.to_string(),
            is_anonymous,
            is_public: params.is_public.unwrap_or(false),
        })
        .await
        .map(PrayerRequestVisible::from)
        .map_err(error_500)
}
