use db_adapters::service_schedule_adapter::{
    ServiceScheduleAdapter, ServiceScheduleMutation, ServiceScheduleParams, ServiceScheduleQuery,
};
use entities::admin;
use uuid::Uuid;

use crate::{
    error_500, require_role,
    service_schedules::types::{ServiceScheduleRequest, ServiceScheduleVisible},
    UseCaseError, ADMIN_OR_ABOVE,
};

pub async fn update_service_schedule<'a>(
    admin: admin::Model,
    params: ServiceScheduleRequest,
    service_schedule_id: Uuid,
    service_schedule_adapter: ServiceScheduleAdapter<'a>,
) -> Result<ServiceScheduleVisible, UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let params = ServiceScheduleParams::try_from(params)?;
    let service_schedule = service_schedule_adapter
        .clone()
        .get_by_id(service_schedule_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Service schedule with this id was not found".to_string(),
        ))?;
    service_schedule_adapter
        .update(service_schedule, params)
        .await
        .map(ServiceScheduleVisible::from)
        .map_err(error_500)
}
