use super::*;

/// Tests that dropping a repository without committing discards staged changes.
///
/// Expected: Ok with no rows stored
#[tokio::test]
async fn discards_uncommitted_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_coupon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    {
        let repo = DatabaseCouponRepository::new(db);
        repo.create(param("ROLLED_BACK", 10)).await?;
    }

    let count = entity::prelude::Coupon::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests committing with nothing staged.
///
/// Expected: Ok
#[tokio::test]
async fn commit_without_changes_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_coupon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DatabaseCouponRepository::new(db);
    repo.commit().await?;
    repo.commit().await?;

    Ok(())
}

/// Tests that several staged operations become durable together.
///
/// Expected: Ok with the created coupon present and the removed one gone
#[tokio::test]
async fn commits_all_staged_operations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_coupon_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_coupon(db).await?;

    let repo = DatabaseCouponRepository::new(db);
    let created = repo.create(param("FRESH", 30)).await?;
    repo.remove(Coupon::from_entity(doomed.clone())).await?;
    repo.commit().await?;

    let remaining: Vec<i32> = entity::prelude::Coupon::find()
        .all(db)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(remaining, vec![created.id]);

    Ok(())
}
