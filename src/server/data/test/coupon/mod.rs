use crate::server::{
    data::coupon::{CouponRepository, DatabaseCouponRepository},
    error::AppError,
    model::coupon::{Coupon, CreateCouponParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod commit;
mod remove;

fn param(name: &str, percent: i32) -> CreateCouponParam {
    CreateCouponParam {
        name: name.to_string(),
        percent,
        is_active: true,
    }
}
