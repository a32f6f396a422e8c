pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_employee_tables;
mod m20250101_000002_create_catalog_tables;
mod m20250101_000003_create_recipe_tables;
mod m20250101_000004_create_book_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_employee_tables::Migration),
            Box::new(m20250101_000002_create_catalog_tables::Migration),
            Box::new(m20250101_000003_create_recipe_tables::Migration),
            Box::new(m20250101_000004_create_book_tables::Migration),
        ]
    }
}
