use db_adapters::donation_adapter::{DonationAdapter, DonationFilter, DonationQuery};
use entities::{admin, sea_orm_active_enums::DonationStatus};

use crate::{
    donations::types::DonationSummary, error_500, require_role, UseCaseError, ADMIN_OR_ABOVE,
};

/// Only completed donations count towards the totals.
pub async fn summarize_donations<'a>(
    admin: admin::Model,
    donation_adapter: DonationAdapter<'a>,
) -> Result<DonationSummary, UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let by_fund = donation_adapter
        .filter_eq_status(DonationStatus::Completed)
        .summarize_by_fund()
        .await
        .map_err(error_500)?;

    Ok(DonationSummary {
        total_amount: by_fund.iter().map(|fund| fund.total_amount).sum(),
        donation_count: by_fund.iter().map(|fund| fund.donation_count).sum(),
        by_fund,
    })
}
