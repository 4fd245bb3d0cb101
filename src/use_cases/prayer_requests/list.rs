use db_adapters::{
    prayer_request_adapter::{
        PrayerRequestAdapter, PrayerRequestFilter, PrayerRequestOrder, PrayerRequestQuery,
    },
    Order::Desc,
};
use entities::{admin, sea_orm_active_enums::PrayerRequestStatus};

use crate::{
    error_500,
    prayer_requests::types::{PrayerRequestListQuery, PrayerRequestVisible, PublicPrayerRequest},
    require_role, UseCaseError, EDITOR_OR_ABOVE,
};

pub async fn list_public_prayer_requests<'a>(
    prayer_request_adapter: PrayerRequestAdapter<'a>,
) -> Result<Vec<PublicPrayerRequest>, UseCaseError> {
    prayer_request_adapter
        .filter_eq_is_public(true)
        .filter_ne_status(PrayerRequestStatus::Archived)
        .order_by_created_at(Desc)
        .get_all()
        .await
        .map(|requests| requests.into_iter().map(PublicPrayerRequest::from).collect())
        .map_err(error_500)
}

pub async fn list_prayer_requests<'a>(
    admin: admin::Model,
    query: PrayerRequestListQuery,
    prayer_request_adapter: PrayerRequestAdapter<'a>,
) -> Result<Vec<PrayerRequestVisible>, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    let mut prayer_request_adapter = prayer_request_adapter;
    if let Some(status) = query.status {
        prayer_request_adapter = prayer_request_adapter.filter_eq_status(status);
    }
    prayer_request_adapter
        .order_by_created_at(Desc)
        .get_all()
        .await
        .map(|requests| requests.into_iter().map(PrayerRequestVisible::from).collect())
        .map_err(error_500)
}
