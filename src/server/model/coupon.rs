//! Domain & parameter models for coupon operations
//!
//! Defines the coupon domain model and its parameter models, and provides the mapping
//! between them, the database entity, and the transfer shapes. Every conversion here is
//! pure and total; inputs are assumed to have passed validation.

use chrono::{DateTime, Utc};

use crate::model::coupon::{CouponCreateDto, CouponDto, CouponUpdateDto};

/// The coupon domain model
///
/// `id` and `created` are fixed once the store has accepted the coupon; only `name`,
/// `percent` and `is_active` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    pub id: i32,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Converts an entity model to the coupon domain model
    pub fn from_entity(entity: entity::coupon::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            percent: entity.percent,
            is_active: entity.is_active,
            created: entity.created_at,
            last_updated: entity.last_updated,
        }
    }

    /// Copies the mutable fields of `param` onto this coupon.
    ///
    /// Identifier and timestamps are preserved; the repository stamps `last_updated`
    /// when the change is staged.
    pub fn apply_update(self, param: UpdateCouponParam) -> Self {
        Self {
            name: param.name,
            percent: param.percent,
            is_active: param.is_active,
            ..self
        }
    }

    /// Key the store uses to enforce case-insensitive name uniqueness.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Converts the coupon into its read view
    pub fn into_dto(self) -> CouponDto {
        CouponDto {
            id: self.id,
            name: self.name,
            percent: self.percent,
            is_active: self.is_active,
            created: self.created,
            last_updated: self.last_updated,
        }
    }
}

/// Lower-cases a coupon name for uniqueness comparisons.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Parameters for creating a new coupon
///
/// Carries no identifier; the store assigns one when the coupon is staged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCouponParam {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

impl CreateCouponParam {
    pub fn from_dto(dto: CouponCreateDto) -> Self {
        Self {
            name: dto.name,
            percent: dto.percent,
            is_active: dto.is_active,
        }
    }
}

/// Parameters for updating an existing coupon
///
/// The identifier of the update view selects the coupon and is not carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCouponParam {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

impl UpdateCouponParam {
    pub fn from_dto(dto: CouponUpdateDto) -> Self {
        Self {
            name: dto.name,
            percent: dto.percent,
            is_active: dto.is_active,
        }
    }
}
