use sea_orm_migration::prelude::*;

use super::m20251214_000001_create_coupon_table::Coupon;

/// Starter coupons available on a fresh database.
const SEED_COUPONS: [(&str, i32); 2] = [("10OFF", 10), ("20OFF", 20)];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Coupon::Table).columns([
            Coupon::Name,
            Coupon::NormalizedName,
            Coupon::Percent,
            Coupon::IsActive,
            Coupon::CreatedAt,
        ]);

        for (name, percent) in SEED_COUPONS {
            insert.values_panic([
                name.into(),
                name.to_lowercase().into(),
                percent.into(),
                true.into(),
                Expr::current_timestamp().into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Coupon::Table).to_owned())
            .await
    }
}
