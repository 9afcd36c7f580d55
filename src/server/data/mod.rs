//! Database repository layer.
//!
//! Repositories hide the storage engine behind the `CouponRepository` contract and
//! convert entity models into domain models at the boundary, so entity models never
//! leak into services or controllers.

pub mod coupon;

#[cfg(test)]
mod test;
