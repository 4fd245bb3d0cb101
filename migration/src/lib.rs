pub use sea_orm_migration::prelude::*;

mod m20250105_000001_create_admins_table;
mod m20250105_000002_create_blogs_table;
mod m20250112_000001_create_events_table;
mod m20250112_000002_create_event_registrations_table;
mod m20250119_000001_create_donations_table;
mod m20250126_000001_create_prayer_requests_table;
mod m20250126_000002_create_service_schedules_table;
mod m20250202_000001_create_sermons_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_000001_create_admins_table::Migration),
            Box::new(m20250105_000002_create_blogs_table::Migration),
            Box::new(m20250112_000001_create_events_table::Migration),
            Box::new(m20250112_000002_create_event_registrations_table::Migration),
            Box::new(m20250119_000001_create_donations_table::Migration),
            Box::new(m20250126_000001_create_prayer_requests_table::Migration),
            Box::new(m20250126_000002_create_service_schedules_table::Migration),
            Box::new(m20250202_000001_create_sermons_table::Migration),
        ]
    }
}
