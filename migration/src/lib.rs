pub use sea_orm_migration::prelude::*;

mod m20240104_000001_create_team_table;
mod m20240104_000002_create_user_table;
mod m20240104_000003_create_membership_table;
mod m20240212_000001_create_invitation_table;
mod m20240305_000001_create_task_table;
mod m20240412_000001_create_manuscript_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240104_000001_create_team_table::Migration),
            Box::new(m20240104_000002_create_user_table::Migration),
            Box::new(m20240104_000003_create_membership_table::Migration),
            Box::new(m20240212_000001_create_invitation_table::Migration),
            Box::new(m20240305_000001_create_task_table::Migration),
            Box::new(m20240412_000001_create_manuscript_table::Migration),
        ]
    }
}
