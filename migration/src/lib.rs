pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_mentor_table;
mod m20260105_000003_create_mentee_table;
mod m20260105_000004_create_subject_table;
mod m20260105_000005_create_academic_record_table;
mod m20260105_000006_create_notification_tables;
mod m20260105_000007_create_message_tables;
mod m20260105_000008_create_error_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_mentor_table::Migration),
            Box::new(m20260105_000003_create_mentee_table::Migration),
            Box::new(m20260105_000004_create_subject_table::Migration),
            Box::new(m20260105_000005_create_academic_record_table::Migration),
            Box::new(m20260105_000006_create_notification_tables::Migration),
            Box::new(m20260105_000007_create_message_tables::Migration),
            Box::new(m20260105_000008_create_error_log_table::Migration),
        ]
    }
}
