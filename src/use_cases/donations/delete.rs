use db_adapters::donation_adapter::{DonationAdapter, DonationMutation, DonationQuery};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, SUPER_ADMIN_ONLY};

pub async fn delete_donation<'a>(
    admin: admin::Model,
    donation_id: Uuid,
    donation_adapter: DonationAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, SUPER_ADMIN_ONLY)?;
    let donation = donation_adapter
        .clone()
        .get_by_id(donation_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Donation with this id was not found".to_string(),
        ))?;
    donation_adapter.delete(donation).await.map_err(error_500)
}
