use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Read view of a coupon returned by every endpoint that yields one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Request body for `POST /api/coupon`. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponCreateDto {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

/// Request body for `PUT /api/coupon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponUpdateDto {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}
