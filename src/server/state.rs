//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the coupon store and the two
//! validators configured from the coupon rules.

use crate::server::{
    data::coupon::CouponStore,
    validation::{CouponRules, CreateCouponValidator, UpdateCouponValidator},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the store shares its map or connection pool and
/// the validators are plain copies of the rules.
#[derive(Clone)]
pub struct AppState {
    /// Backing store handing out one repository per request.
    pub store: CouponStore,

    /// Rules for `POST /api/coupon` bodies.
    pub create_validator: CreateCouponValidator,

    /// Rules for `PUT /api/coupon` bodies.
    pub update_validator: UpdateCouponValidator,
}

impl AppState {
    /// Creates a new application state from the selected store and coupon rules.
    ///
    /// # Arguments
    /// - `store` - Coupon store chosen at startup
    /// - `rules` - Limits shared by both validators
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: CouponStore, rules: CouponRules) -> Self {
        Self {
            store,
            create_validator: CreateCouponValidator::new(rules),
            update_validator: UpdateCouponValidator::new(rules),
        }
    }
}
