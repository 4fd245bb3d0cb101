use db_adapters::service_schedule_adapter::{
    ServiceScheduleAdapter, ServiceScheduleMutation, ServiceScheduleQuery,
};
use entities::admin;
use uuid::Uuid;

use crate::{error_500, require_role, UseCaseError, ADMIN_OR_ABOVE};

pub async fn delete_service_schedule<'a>(
    admin: admin::Model,
    service_schedule_id: Uuid,
    service_schedule_adapter: ServiceScheduleAdapter<'a>,
) -> Result<(), UseCaseError> {
    require_role(&admin, ADMIN_OR_ABOVE)?;
    let service_schedule = service_schedule_adapter
        .clone()
        .get_by_id(service_schedule_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Service schedule with this id was not found".to_string(),
        ))?;
    service_schedule_adapter
        .delete(service_schedule)
        .await
        .map_err(error_500)
}
