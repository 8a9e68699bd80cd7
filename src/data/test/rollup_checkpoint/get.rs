use super::*;

/// Tests reading a period that was never checkpointed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_checkpoint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RollupCheckpointRepository::new(db);

    assert!(repo.get(RollupPeriod::Daily).await?.is_none());

    Ok(())
}
