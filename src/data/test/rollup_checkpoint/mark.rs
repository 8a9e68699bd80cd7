use super::*;

/// Tests recording and replacing a checkpoint.
///
/// Expected: Ok with the latest instant stored
#[tokio::test]
async fn replaces_previous_checkpoint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = Utc.with_ymd_and_hms(2025, 3, 3, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap();

    let repo = RollupCheckpointRepository::new(db);
    repo.mark(RollupPeriod::Daily, first).await?;
    repo.mark(RollupPeriod::Daily, second).await?;

    assert_eq!(repo.get(RollupPeriod::Daily).await?, Some(second));

    Ok(())
}

/// Tests that periods are checkpointed independently.
///
/// Expected: Ok with only the marked period present
#[tokio::test]
async fn periods_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reset_at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

    let repo = RollupCheckpointRepository::new(db);
    repo.mark(RollupPeriod::Monthly, reset_at).await?;

    assert_eq!(repo.get(RollupPeriod::Monthly).await?, Some(reset_at));
    assert!(repo.get(RollupPeriod::Weekly).await?.is_none());

    Ok(())
}
