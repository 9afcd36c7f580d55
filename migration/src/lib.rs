pub use sea_orm_migration::prelude::*;

mod m20251214_000001_create_coupon_table;
mod m20251214_000002_seed_coupon_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251214_000001_create_coupon_table::Migration),
            Box::new(m20251214_000002_seed_coupon_table::Migration),
        ]
    }
}
