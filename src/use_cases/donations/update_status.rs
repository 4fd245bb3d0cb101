use db_adapters::donation_adapter::{DonationAdapter, DonationMutation, DonationQuery};
use entities::admin;
use uuid::Uuid;

use crate::{
    donations::types::{DonationStatusUpdateRequest, DonationVisible},
    error_500, require_role, UseCaseError, ADMIN_OR_ABOVE,
};

pub async fn update_donation_status<'a>(
    admin: admin::Model,
    params: DonationStatusUpdateRequest,
    donation_id: Uuid,
    donation_adapter: DonationAdapter<'a>,
) -> Result<DonationVisible, UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let donation = donation_adapter
        .clone()
        .get_by_id(donation_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Donation with this id was not found".to_string(),
        ))?;
    donation_adapter
        .update_status(donation, params.status)
        .await
        .map(DonationVisible::from)
        .map_err(error_500)
}
