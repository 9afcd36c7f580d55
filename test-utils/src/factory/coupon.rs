//! Coupon factory for creating test coupon rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test coupons with customizable fields.
///
/// The stored `normalized_name` is always derived from `name`, matching what the
/// service writes.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::coupon::CouponFactory;
///
/// let coupon = CouponFactory::new(&db)
///     .name("SAVE10")
///     .percent(10)
///     .build()
///     .await?;
/// ```
pub struct CouponFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    percent: i32,
    is_active: bool,
}

impl<'a> CouponFactory<'a> {
    /// Creates a new CouponFactory with default values.
    ///
    /// Defaults:
    /// - name: `"COUPON{id}"` where id is auto-incremented
    /// - percent: `10`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("COUPON{}", id),
            percent: 10,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn percent(mut self, percent: i32) -> Self {
        self.percent = percent;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the coupon entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::coupon::Model)` - Created coupon entity
    /// - `Err(DbErr)` - Database error during insert, including a duplicate name
    pub async fn build(self) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            id: ActiveValue::NotSet,
            normalized_name: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            percent: ActiveValue::Set(self.percent),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            last_updated: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a coupon with default values.
///
/// Shorthand for `CouponFactory::new(db).build().await`.
pub async fn create_coupon(db: &DatabaseConnection) -> Result<entity::coupon::Model, DbErr> {
    CouponFactory::new(db).build().await
}
