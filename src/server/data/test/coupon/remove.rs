use super::*;

/// Tests removing a coupon.
///
/// Expected: Ok with the row gone after commit
#[tokio::test]
async fn removes_coupon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_coupon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::create_coupon(db).await?;
    let kept = factory::create_coupon(db).await?;

    let repo = DatabaseCouponRepository::new(db);
    repo.remove(Coupon::from_entity(row.clone())).await?;
    repo.commit().await?;

    assert!(entity::prelude::Coupon::find_by_id(row.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Coupon::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests removing a coupon that is already gone.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_coupon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_coupon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::create_coupon(db).await?;
    entity::prelude::Coupon::delete_by_id(row.id).exec(db).await?;

    let repo = DatabaseCouponRepository::new(db);
    let result = repo.remove(Coupon::from_entity(row)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
