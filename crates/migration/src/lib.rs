pub use sea_orm_migration::prelude::*;

mod m20251019_create_student_system_tables;
mod m20251020_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_create_student_system_tables::Migration),
            Box::new(m20251020_add_lookup_indexes::Migration),
        ]
    }
}
