//! Coupon repository contract and its storage backends.
//!
//! Handlers only ever talk to `dyn CouponRepository`. Mutations are staged by
//! `create`, `update` and `remove` and become durable on `commit`. Lookups that find
//! nothing return `Ok(None)` rather than an error.

pub mod database;
pub mod memory;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::coupon::{Coupon, CreateCouponParam},
};

pub use database::DatabaseCouponRepository;
pub use memory::InMemoryCouponRepository;

/// Storage abstraction the coupon handlers depend on.
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Returns every coupon ordered by identifier.
    async fn get_all(&self) -> Result<Vec<Coupon>, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>, AppError>;

    /// Finds a coupon whose name matches `name` ignoring case.
    async fn get_by_name(&self, name: &str) -> Result<Option<Coupon>, AppError>;

    /// Stages a new coupon and returns it with its store-assigned identifier.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - The store already holds a coupon with this name
    async fn create(&self, param: CreateCouponParam) -> Result<Coupon, AppError>;

    /// Stages new values for an existing coupon's mutable fields and stamps
    /// `last_updated`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No coupon has this identifier
    /// - `Err(AppError::Conflict)` - Another coupon already uses the new name
    async fn update(&self, coupon: Coupon) -> Result<Coupon, AppError>;

    /// Stages deletion of `coupon`.
    async fn remove(&self, coupon: Coupon) -> Result<(), AppError>;

    /// Durably applies everything staged through this repository.
    async fn commit(&self) -> Result<(), AppError>;
}

/// Backing store selected once at startup.
///
/// Cloning is cheap: the in-memory variant shares its map and the database variant
/// shares the connection pool.
#[derive(Clone)]
pub enum CouponStore {
    InMemory(InMemoryCouponRepository),
    Database(DatabaseConnection),
}

impl CouponStore {
    /// Hands out the repository serving a single request.
    ///
    /// Database repositories are request-scoped so that each request gets its own
    /// unit of work.
    pub fn repository(&self) -> Box<dyn CouponRepository + '_> {
        match self {
            Self::InMemory(repo) => Box::new(repo.clone()),
            Self::Database(db) => Box::new(DatabaseCouponRepository::new(db)),
        }
    }
}
