//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each entity
//! has a `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let coupon = factory::create_coupon(&db).await?;
//!
//! let inactive = factory::coupon::CouponFactory::new(&db)
//!     .name("SUMMER25")
//!     .percent(25)
//!     .active(false)
//!     .build()
//!     .await?;
//! ```

pub mod coupon;
pub mod helpers;

pub use coupon::create_coupon;
