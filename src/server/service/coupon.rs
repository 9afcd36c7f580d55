use crate::{
    model::coupon::{CouponCreateDto, CouponUpdateDto},
    server::{
        data::coupon::CouponRepository,
        error::AppError,
        model::coupon::{Coupon, CreateCouponParam, UpdateCouponParam},
        validation::Validator,
    },
};

/// Request pipelines for the five coupon operations.
///
/// Each pipeline validates first, then checks existence and uniqueness, then stages the
/// mutation, and commits before returning. No state is kept between calls.
pub struct CouponService<'a> {
    repo: &'a dyn CouponRepository,
}

impl<'a> CouponService<'a> {
    pub fn new(repo: &'a dyn CouponRepository) -> Self {
        Self { repo }
    }

    /// Gets every coupon.
    pub async fn get_all(&self) -> Result<Vec<Coupon>, AppError> {
        self.repo.get_all().await
    }

    /// Gets a coupon by ID. A missing coupon is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>, AppError> {
        self.repo.get_by_id(id).await
    }

    /// Creates a coupon after validation and the name uniqueness check.
    ///
    /// # Returns
    /// - `Ok(Coupon)` - The committed coupon with its assigned ID
    /// - `Err(AppError::Validation)` - First failing field rule
    /// - `Err(AppError::Conflict)` - Name already used, ignoring case
    pub async fn create(
        &self,
        validator: &impl Validator<CouponCreateDto>,
        dto: CouponCreateDto,
    ) -> Result<Coupon, AppError> {
        validator.validate(&dto).into_result()?;

        if self.repo.get_by_name(&dto.name).await?.is_some() {
            return Err(AppError::duplicate_name());
        }

        let coupon = self.repo.create(CreateCouponParam::from_dto(dto)).await?;
        self.repo.commit().await?;

        Ok(coupon)
    }

    /// Replaces the name, percent and active flag of an existing coupon.
    ///
    /// # Returns
    /// - `Ok(Coupon)` - The committed coupon
    /// - `Err(AppError::Validation)` - First failing field rule
    /// - `Err(AppError::NotFound)` - No coupon has the given ID
    /// - `Err(AppError::Conflict)` - Another coupon already uses the new name
    pub async fn update(
        &self,
        validator: &impl Validator<CouponUpdateDto>,
        dto: CouponUpdateDto,
    ) -> Result<Coupon, AppError> {
        validator.validate(&dto).into_result()?;

        let Some(existing) = self.repo.get_by_id(dto.id).await? else {
            return Err(AppError::not_found());
        };

        if let Some(other) = self.repo.get_by_name(&dto.name).await? {
            if other.id != existing.id {
                return Err(AppError::duplicate_name());
            }
        }

        let coupon = self
            .repo
            .update(existing.apply_update(UpdateCouponParam::from_dto(dto)))
            .await?;
        self.repo.commit().await?;

        Ok(coupon)
    }

    /// Deletes a coupon.
    ///
    /// # Returns
    /// - `Ok(())` - The deletion is committed
    /// - `Err(AppError::NotFound)` - No coupon has the given ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let Some(coupon) = self.repo.get_by_id(id).await? else {
            return Err(AppError::not_found());
        };

        self.repo.remove(coupon).await?;
        self.repo.commit().await?;

        Ok(())
    }
}
