use super::*;

#[tokio::test]
async fn updates_and_commits_coupon() -> Result<(), AppError> {
    let repo = RecordingRepository::default();
    let seeded = repo.seed("SAVE10", 10).await;

    let coupon = CouponService::new(&repo)
        .update(
            &UpdateCouponValidator::default(),
            update_dto(seeded.id, "SAVE15", 15, false),
        )
        .await?;

    assert_eq!(coupon.id, seeded.id);
    assert_eq!(coupon.name, "SAVE15");
    assert_eq!(coupon.percent, 15);
    assert!(!coupon.is_active);
    assert_eq!(coupon.created, seeded.created);
    assert!(coupon.last_updated.is_some());
    assert_eq!(
        repo.calls(),
        ["get_by_id", "get_by_name", "update", "commit"]
    );

    Ok(())
}

#[tokio::test]
async fn rejects_invalid_input_without_touching_store() {
    let repo = RecordingRepository::default();

    let result = CouponService::new(&repo)
        .update(
            &UpdateCouponValidator::default(),
            update_dto(0, "SAVE10", 10, true),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn rejects_unknown_identifier() {
    let repo = RecordingRepository::default();

    let result = CouponService::new(&repo)
        .update(
            &UpdateCouponValidator::default(),
            update_dto(9999, "SAVE10", 10, true),
        )
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, NOT_FOUND_MESSAGE),
        other => panic!("expected not found, got {:?}", other),
    }
    assert_eq!(repo.calls(), ["get_by_id"]);
}

#[tokio::test]
async fn rejects_name_of_other_coupon() -> Result<(), AppError> {
    let repo = RecordingRepository::default();
    repo.seed("SAVE10", 10).await;
    let other = repo.seed("SAVE20", 20).await;

    let result = CouponService::new(&repo)
        .update(
            &UpdateCouponValidator::default(),
            update_dto(other.id, "save10", 20, true),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(repo.calls(), ["get_by_id", "get_by_name"]);
    assert_eq!(repo.inner.get_by_id(other.id).await?, Some(other));

    Ok(())
}

#[tokio::test]
async fn allows_recasing_own_name() -> Result<(), AppError> {
    let repo = RecordingRepository::default();
    let seeded = repo.seed("save10", 10).await;

    let coupon = CouponService::new(&repo)
        .update(
            &UpdateCouponValidator::default(),
            update_dto(seeded.id, "SAVE10", 10, true),
        )
        .await?;

    assert_eq!(coupon.name, "SAVE10");

    Ok(())
}
