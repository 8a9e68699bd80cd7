use super::*;

/// Tests the first join of a member.
///
/// Verifies that a record is created lazily with the join time set and every counter
/// starting at zero.
///
/// Expected: Ok with a new record holding zeroed counters
#[tokio::test]
async fn creates_record_on_first_join() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let join = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
    let repo = TimeActivityRepository::new(db);
    repo.record_join("S1", "U1", join).await?;

    let record = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(record.join_time, Some(join));
    assert_eq!(record.leave_time, None);
    assert_eq!(record.daily_hours, 0.0);
    assert_eq!(record.all_time_hours, 0.0);

    Ok(())
}

/// Tests a repeated join without a leave in between.
///
/// Verifies that the join time is overwritten and the accumulated counters are kept.
///
/// Expected: Ok with the newer join time and unchanged counters
#[tokio::test]
async fn overwrites_join_time_and_keeps_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .join_time(Some(Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()))
        .hours(2.0)
        .build()
        .await?;

    let rejoin = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
    let repo = TimeActivityRepository::new(db);
    repo.record_join("S1", "U1", rejoin).await?;

    let record = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(record.join_time, Some(rejoin));
    assert_eq!(record.weekly_hours, 2.0);
    assert_eq!(record.all_time_hours, 2.0);

    let rows = entity::prelude::TimeActivity::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests that joins are keyed per server and member.
///
/// Expected: Ok with one record per (server, user) pair
#[tokio::test]
async fn keeps_pairs_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let join = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
    let repo = TimeActivityRepository::new(db);
    repo.record_join("S1", "U1", join).await?;
    repo.record_join("S2", "U1", join).await?;
    repo.record_join("S1", "U2", join).await?;

    let rows = entity::prelude::TimeActivity::find().all(db).await?;
    assert_eq!(rows.len(), 3);

    Ok(())
}
