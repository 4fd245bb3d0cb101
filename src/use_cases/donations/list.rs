use db_adapters::{
    donation_adapter::{DonationAdapter, DonationFilter, DonationOrder, DonationQuery},
    Order::Desc,
    PageParams,
};
use entities::admin;

use crate::{
    donations::types::{DonationListQuery, DonationVisible},
    error_500, require_role, Paginated, UseCaseError, ADMIN_OR_ABOVE,
};

pub async fn list_donations<'a>(
    admin: admin::Model,
    query: DonationListQuery,
    donation_adapter: DonationAdapter<'a>,
) -> Result<Paginated<DonationVisible>, UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let mut donation_adapter = donation_adapter;
    if let Some(fund) = query.fund {
        donation_adapter = donation_adapter.filter_eq_fund(fund);
    }
    if let Some(status) = query.status {
        donation_adapter = donation_adapter.filter_eq_status(status);
    }
    let page = PageParams::new(query.page, query.limit);
    donation_adapter
        .order_by_donated_at(Desc)
        .get_page(page)
        .await
        .map(|(donations, total)| {
            Paginated::new(
                donations.into_iter().map(DonationVisible::from).collect(),
                total,
                page,
            )
        })
        .map_err(error_500)
}
