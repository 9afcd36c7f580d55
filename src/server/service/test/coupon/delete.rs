use super::*;

#[tokio::test]
async fn deletes_and_commits_coupon() -> Result<(), AppError> {
    let repo = RecordingRepository::default();
    let seeded = repo.seed("SAVE10", 10).await;
    let service = CouponService::new(&repo);

    service.delete(seeded.id).await?;

    assert_eq!(repo.calls(), ["get_by_id", "remove", "commit"]);
    assert!(service.get_by_id(seeded.id).await?.is_none());
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn rejects_unknown_identifier() {
    let repo = RecordingRepository::default();

    let result = CouponService::new(&repo).delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(repo.calls(), ["get_by_id"]);
}
