use db_adapters::service_schedule_adapter::{
    ServiceScheduleAdapter, ServiceScheduleMutation, ServiceScheduleParams,
};
use entities::admin;

use crate::{
    error_500, require_role,
    service_schedules::types::{ServiceScheduleRequest, ServiceScheduleVisible},
    UseCaseError, ADMIN_OR_ABOVE,
};

pub async fn create_service_schedule<'a>(
    admin: admin::Model,
    params: ServiceScheduleRequest,
    service_schedule_adapter: ServiceScheduleAdapter<'a>,
) -> Result<ServiceScheduleVisible, UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let params = ServiceScheduleParams::try_from(params)?;
    service_schedule_adapter
        .create(params)
        .await
        .map(ServiceScheduleVisible::from)
        .map_err(error_500)
}
