use db_adapters::prayer_request_adapter::{
    PrayerRequestAdapter, PrayerRequestMutation, PrayerRequestQuery, UpdatePrayerRequestParams,
};
use entities::admin;
use uuid::Uuid;

use crate::{
    error_500,
    prayer_requests::types::{PrayerRequestUpdateRequest, PrayerRequestVisible},
    require_role, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn update_prayer_request<'a>(
    admin: admin::Model,
    params: PrayerRequestUpdateRequest,
    prayer_request_id: Uuid,
    prayer_request_adapter: PrayerRequestAdapter<'a>,
) -> Result<PrayerRequestVisible, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let prayer_request = prayer_request_adapter
        .clone()
        .get_by_id(prayer_request_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Prayer request with this id was not found".to_string(),
        ))?;
    prayer_request_adapter
        .partial_update(
            prayer_request,
            UpdatePrayerRequestParams {
                status: params.status,
                is_public: params.is_public,
            },
        )
        .await
        .map(PrayerRequestVisible::from)
        .map_err(error_500)
}
