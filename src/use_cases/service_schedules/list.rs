use db_adapters::{
    service_schedule_adapter::{
        ServiceScheduleAdapter, ServiceScheduleFilter, ServiceScheduleOrder, ServiceScheduleQuery,
    },
    Order::Asc,
};
use entities::admin;

use crate::{
    error_500, require_role, service_schedules::types::ServiceScheduleVisible, UseCaseError,
    EDITOR_OR_ABOVE,
};

pub async fn list_active_service_schedules<'a>(
    service_schedule_adapter: ServiceScheduleAdapter<'a>,
) -> Result<Vec<ServiceScheduleVisible>, UseCaseError> {
    list(service_schedule_adapter.filter_eq_is_active(true)).await
}

pub async fn list_all_service_schedules<'a>(
    admin: admin::Model,
    service_schedule_adapter: ServiceScheduleAdapter<'a>,
) -> Result<Vec<ServiceScheduleVisible>, UseCaseError> {
    require_role(&admin, EDITOR_OR_ABOVE)?;
    list(service_schedule_adapter).await
}

async fn list<'a>(
    service_schedule_adapter: ServiceScheduleAdapter<'a>,
) -> Result<Vec<ServiceScheduleVisible>, UseCaseError> {
    service_schedule_adapter
        .order_by_day_of_week(Asc)
        .order_by_start_time(Asc)
        .get_all()
        .await
        .map(|schedules| {
            schedules
                .into_iter()
                .map(ServiceScheduleVisible::from)
                .collect()
        })
        .map_err(error_500)
}
