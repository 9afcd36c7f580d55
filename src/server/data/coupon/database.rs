//! Coupon data repository for database operations
//!
//! Provides the `DatabaseCouponRepository`, a unit of work over the `coupon` table.
//! The first staged mutation opens a transaction; later reads in the same request go
//! through it and therefore see staged changes. `commit` commits the transaction, and
//! dropping the repository without committing rolls it back.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};
use tokio::sync::Mutex;

use super::CouponRepository;
use crate::server::{
    error::AppError,
    model::coupon::{normalize_name, Coupon, CreateCouponParam},
};

/// Repository providing database operations for coupon management.
///
/// Name uniqueness is backed by the unique index on `normalized_name`; a violation
/// surfaces as `AppError::Conflict` whether it is caught on write or on commit.
pub struct DatabaseCouponRepository<'a> {
    db: &'a DatabaseConnection,
    staged: Mutex<Option<DatabaseTransaction>>,
}

impl<'a> DatabaseCouponRepository<'a> {
    /// Creates a new DatabaseCouponRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            staged: Mutex::new(None),
        }
    }
}

/// Returns the open transaction in `slot`, beginning one if none is open yet.
async fn begin<'t>(
    db: &DatabaseConnection,
    slot: &'t mut Option<DatabaseTransaction>,
) -> Result<&'t DatabaseTransaction, DbErr> {
    let txn = match slot.take() {
        Some(txn) => txn,
        None => db.begin().await?,
    };

    Ok(slot.insert(txn))
}

/// Maps write failures, turning unique-name violations into conflicts.
fn map_write_err(err: DbErr) -> AppError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return AppError::not_found();
    }

    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::duplicate_name(),
        _ => AppError::DbErr(err),
    }
}

#[async_trait]
impl CouponRepository for DatabaseCouponRepository<'_> {
    async fn get_all(&self) -> Result<Vec<Coupon>, AppError> {
        let query =
            entity::prelude::Coupon::find().order_by_asc(entity::coupon::Column::Id);

        let staged = self.staged.lock().await;
        let models = match staged.as_ref() {
            Some(txn) => query.all(txn).await?,
            None => query.all(self.db).await?,
        };

        Ok(models.into_iter().map(Coupon::from_entity).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>, AppError> {
        let query = entity::prelude::Coupon::find_by_id(id);

        let staged = self.staged.lock().await;
        let model = match staged.as_ref() {
            Some(txn) => query.one(txn).await?,
            None => query.one(self.db).await?,
        };

        Ok(model.map(Coupon::from_entity))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Coupon>, AppError> {
        let query = entity::prelude::Coupon::find()
            .filter(entity::coupon::Column::NormalizedName.eq(normalize_name(name)));

        let staged = self.staged.lock().await;
        let model = match staged.as_ref() {
            Some(txn) => query.one(txn).await?,
            None => query.one(self.db).await?,
        };

        Ok(model.map(Coupon::from_entity))
    }

    async fn create(&self, param: CreateCouponParam) -> Result<Coupon, AppError> {
        let mut staged = self.staged.lock().await;
        let txn = begin(self.db, &mut staged).await?;

        let entity = entity::coupon::ActiveModel {
            normalized_name: ActiveValue::Set(normalize_name(&param.name)),
            name: ActiveValue::Set(param.name),
            percent: ActiveValue::Set(param.percent),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            last_updated: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(map_write_err)?;

        Ok(Coupon::from_entity(entity))
    }

    async fn update(&self, coupon: Coupon) -> Result<Coupon, AppError> {
        let mut staged = self.staged.lock().await;
        let txn = begin(self.db, &mut staged).await?;

        let entity = entity::coupon::ActiveModel {
            id: ActiveValue::Unchanged(coupon.id),
            normalized_name: ActiveValue::Set(coupon.normalized_name()),
            name: ActiveValue::Set(coupon.name),
            percent: ActiveValue::Set(coupon.percent),
            is_active: ActiveValue::Set(coupon.is_active),
            created_at: ActiveValue::NotSet,
            last_updated: ActiveValue::Set(Some(Utc::now())),
        }
        .update(txn)
        .await
        .map_err(map_write_err)?;

        Ok(Coupon::from_entity(entity))
    }

    async fn remove(&self, coupon: Coupon) -> Result<(), AppError> {
        let mut staged = self.staged.lock().await;
        let txn = begin(self.db, &mut staged).await?;

        let result = entity::prelude::Coupon::delete_by_id(coupon.id)
            .exec(txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found());
        }

        Ok(())
    }

    async fn commit(&self) -> Result<(), AppError> {
        if let Some(txn) = self.staged.lock().await.take() {
            txn.commit().await.map_err(map_write_err)?;
        }

        Ok(())
    }
}
