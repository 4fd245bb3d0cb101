use db_adapters::prayer_request_adapter::{
    PrayerRequestAdapter, PrayerRequestMutation, PrayerRequestQuery,
};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, ADMIN_OR_ABOVE};

pub async fn delete_prayer_request<'a>(
    admin: admin::Model,
    prayer_request_id: Uuid,
    prayer_request_adapter: PrayerRequestAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let prayer_request = prayer_request_adapter
        .clone()
        .get_by_id(prayer_request_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Prayer request with this id was not found".to_string(),
        ))?;
    prayer_request_adapter
        .delete(prayer_request)
        .await
        .map_err(error_500)
}
