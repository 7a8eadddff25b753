use sea_orm_migration::prelude::*;

mod m20250601_000001_create_continents;
mod m20250601_000002_create_countries;
mod m20250601_000003_create_cities;
mod m20250601_000004_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_continents::Migration),
            Box::new(m20250601_000002_create_countries::Migration),
            Box::new(m20250601_000003_create_cities::Migration),
            Box::new(m20250601_000004_create_users::Migration),
        ]
    }
}
