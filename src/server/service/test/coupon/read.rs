use super::*;

#[tokio::test]
async fn lists_every_coupon() -> Result<(), AppError> {
    let repo = RecordingRepository::default();
    repo.seed("10OFF", 10).await;
    repo.seed("20OFF", 20).await;

    let coupons = CouponService::new(&repo).get_all().await?;

    assert_eq!(coupons.len(), 2);
    assert_eq!(repo.calls(), ["get_all"]);

    Ok(())
}

#[tokio::test]
async fn gets_coupon_by_id() -> Result<(), AppError> {
    let repo = RecordingRepository::default();
    let seeded = repo.seed("10OFF", 10).await;

    let coupon = CouponService::new(&repo).get_by_id(seeded.id).await?;

    assert_eq!(coupon, Some(seeded));

    Ok(())
}

/// A missing coupon is not an error for reads.
#[tokio::test]
async fn missing_coupon_is_none() -> Result<(), AppError> {
    let repo = RecordingRepository::default();

    let coupon = CouponService::new(&repo).get_by_id(9999).await?;

    assert!(coupon.is_none());

    Ok(())
}
