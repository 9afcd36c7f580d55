//! In-memory coupon store.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::CouponRepository;
use crate::server::{
    error::AppError,
    model::coupon::{normalize_name, Coupon, CreateCouponParam},
};

/// Coupons a fresh process starts with.
const SEED_COUPONS: [(&str, i32); 2] = [("10OFF", 10), ("20OFF", 20)];

#[derive(Debug, Default)]
struct Coupons {
    by_id: BTreeMap<i32, Coupon>,
    /// Highest identifier ever handed out. Never decreases.
    last_id: i32,
}

impl Coupons {
    fn name_taken(&self, name: &str, except: Option<i32>) -> bool {
        let normalized = normalize_name(name);
        self.by_id
            .values()
            .any(|c| Some(c.id) != except && c.normalized_name() == normalized)
    }
}

/// Ordered map of coupons keyed by identifier, shared by every request.
///
/// Changes apply immediately, so `commit` has nothing to do. Name uniqueness is
/// re-checked under the write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCouponRepository {
    coupons: Arc<RwLock<Coupons>>,
}

impl InMemoryCouponRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the starter coupons.
    pub fn seeded() -> Self {
        let created = Utc::now();
        let mut coupons = Coupons::default();

        for (name, percent) in SEED_COUPONS {
            coupons.last_id += 1;
            coupons.by_id.insert(
                coupons.last_id,
                Coupon {
                    id: coupons.last_id,
                    name: name.to_string(),
                    percent,
                    is_active: true,
                    created,
                    last_updated: None,
                },
            );
        }

        Self {
            coupons: Arc::new(RwLock::new(coupons)),
        }
    }
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepository {
    async fn get_all(&self) -> Result<Vec<Coupon>, AppError> {
        Ok(self.coupons.read().await.by_id.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Coupon>, AppError> {
        Ok(self.coupons.read().await.by_id.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Coupon>, AppError> {
        let normalized = normalize_name(name);
        Ok(self
            .coupons
            .read()
            .await
            .by_id
            .values()
            .find(|c| c.normalized_name() == normalized)
            .cloned())
    }

    async fn create(&self, param: CreateCouponParam) -> Result<Coupon, AppError> {
        let mut coupons = self.coupons.write().await;

        if coupons.name_taken(&param.name, None) {
            return Err(AppError::duplicate_name());
        }

        let id = coupons
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::InternalError("coupon identifiers exhausted".to_string()))?;
        coupons.last_id = id;

        let coupon = Coupon {
            id,
            name: param.name,
            percent: param.percent,
            is_active: param.is_active,
            created: Utc::now(),
            last_updated: None,
        };
        coupons.by_id.insert(id, coupon.clone());

        Ok(coupon)
    }

    async fn update(&self, coupon: Coupon) -> Result<Coupon, AppError> {
        let mut coupons = self.coupons.write().await;

        let Some(existing) = coupons.by_id.get(&coupon.id) else {
            return Err(AppError::not_found());
        };
        if coupons.name_taken(&coupon.name, Some(coupon.id)) {
            return Err(AppError::duplicate_name());
        }

        let updated = Coupon {
            id: existing.id,
            created: existing.created,
            last_updated: Some(Utc::now()),
            ..coupon
        };
        coupons.by_id.insert(updated.id, updated.clone());

        Ok(updated)
    }

    async fn remove(&self, coupon: Coupon) -> Result<(), AppError> {
        match self.coupons.write().await.by_id.remove(&coupon.id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found()),
        }
    }

    async fn commit(&self) -> Result<(), AppError> {
        Ok(())
    }
}
