use db_adapters::donation_adapter::{DonationAdapter, DonationQuery};
use entities::admin;
use uuid::Uuid;

use crate::{
    donations::types::{DonationReceipt, DonationVisible},
    error_500, require_role, UseCaseError, ADMIN_OR_ABOVE,
};

pub async fn get_donation<'a>(
    admin: admin::Model,
    donation_id: Uuid,
    donation_adapter: DonationAdapter<'a>,
) -> Result<DonationVisible, UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    donation_adapter
        .get_by_id(donation_id)
        .await
        .map_err(error_500)?
        .map(DonationVisible::from)
        .ok_or(UseCaseError::NotFound(
            "Donation with this id was not found".to_string(),
        ))
}

pub async fn get_donation_receipt<'a>(
    receipt_number: &str,
    donation_adapter: DonationAdapter<'a>,
) -> Result<DonationReceipt, UseCaseError> {
    donation_adapter
        .get_by_receipt_number(receipt_number)
        .await
        .map_err(error_500)?
        .map(DonationReceipt::from)
        .ok_or(UseCaseError::NotFound(
            "Receipt with this number was not found".to_string(),
        ))
}
