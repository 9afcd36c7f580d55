use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    model::coupon::{CouponCreateDto, CouponUpdateDto},
    server::{
        data::coupon::{CouponRepository, InMemoryCouponRepository},
        error::{AppError, DUPLICATE_NAME_MESSAGE, NOT_FOUND_MESSAGE},
        model::coupon::{Coupon, CreateCouponParam},
        service::coupon::CouponService,
        validation::{CreateCouponValidator, UpdateCouponValidator},
    },
};

mod delete;
mod read;
mod update;

/// In-memory repository that records the order of every call it receives.
#[derive(Default)]
struct RecordingRepository {
    inner: InMemoryCouponRepository,
    calls: Mutex<Vec<&'static str>>,
    fail_commit: bool,
}

impl RecordingRepository {
    fn failing_commit() -> Self {
        Self {
            fail_commit: true,
            ..Self::default()
        }
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    async fn seed(&self, name: &str, percent: i32) -> Coupon {
        self.inner
            .create(CreateCouponParam {
                name: name.to_string(),
                percent,
                is_active: true,
            })
            .await
            .unwrap()
    }
}

#[async_trait]
impl CouponRepository for RecordingRepository {
    async fn get_all(&self) -> Result<Vec<Coupon>, AppError> {
        self.record("get_all");
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>, AppError> {
        self.record("get_by_id");
        self.inner.get_by_id(id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Coupon>, AppError> {
        self.record("get_by_name");
        self.inner.get_by_name(name).await
    }

    async fn create(&self, param: CreateCouponParam) -> Result<Coupon, AppError> {
        self.record("create");
        self.inner.create(param).await
    }

    async fn update(&self, coupon: Coupon) -> Result<Coupon, AppError> {
        self.record("update");
        self.inner.update(coupon).await
    }

    async fn remove(&self, coupon: Coupon) -> Result<(), AppError> {
        self.record("remove");
        self.inner.remove(coupon).await
    }

    async fn commit(&self) -> Result<(), AppError> {
        self.record("commit");
        if self.fail_commit {
            return Err(AppError::DbErr(sea_orm::DbErr::Custom(
                "commit failed".to_string(),
            )));
        }
        self.inner.commit().await
    }
}

fn create_dto(name: &str, percent: i32) -> CouponCreateDto {
    CouponCreateDto {
        name: name.to_string(),
        percent,
        is_active: true,
    }
}

fn update_dto(id: i32, name: &str, percent: i32, is_active: bool) -> CouponUpdateDto {
    CouponUpdateDto {
        id,
        name: name.to_string(),
        percent,
        is_active,
    }
}
