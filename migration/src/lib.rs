pub use sea_orm_migration::prelude::*;

mod m20220831_000001_create_composer_table;
mod m20220911_000002_create_person_table;
mod m20220918_000003_create_user_table;
mod m20220921_000004_create_customer_table;
mod m20220929_000005_create_team_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220831_000001_create_composer_table::Migration),
            Box::new(m20220911_000002_create_person_table::Migration),
            Box::new(m20220918_000003_create_user_table::Migration),
            Box::new(m20220921_000004_create_customer_table::Migration),
            Box::new(m20220929_000005_create_team_table::Migration),
        ]
    }
}
