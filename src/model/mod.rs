//! Wire formats shared by every endpoint: the response envelope and the coupon
//! transfer shapes.

pub mod api;
pub mod coupon;
