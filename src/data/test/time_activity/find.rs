use super::*;

/// Tests reading a member that never joined voice.
///
/// Expected: Ok(None) rather than a zeroed record
#[tokio::test]
async fn returns_none_before_first_join() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimeActivityRepository::new(db);

    assert!(repo.find("S1", "U1").await?.is_none());
    assert!(repo.join_time("S1", "U1").await?.is_none());

    Ok(())
}

/// Tests that null counters in the store read as zero.
///
/// Expected: Ok with `0.0` for the null columns and stored values for the rest
#[tokio::test]
async fn reads_null_counters_as_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .daily_hours(None)
        .all_time_hours(Some(3.0))
        .build()
        .await?;

    let record = TimeActivityRepository::new(db).find("S1", "U1").await?.unwrap();
    assert_eq!(record.daily_hours, 0.0);
    assert_eq!(record.all_time_hours, 3.0);

    Ok(())
}

/// Tests that the join time of a closed session reads as absent.
///
/// Expected: Ok(None) for a record whose session was closed
#[tokio::test]
async fn join_time_absent_after_leave() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .leave_time(Some(Utc.with_ymd_and_hms(2025, 3, 3, 11, 0, 0).unwrap()))
        .build()
        .await?;

    let repo = TimeActivityRepository::new(db);
    assert!(repo.find("S1", "U1").await?.is_some());
    assert!(repo.join_time("S1", "U1").await?.is_none());

    Ok(())
}
