use super::*;

/// Tests folding a session into an existing record.
///
/// Verifies that every counter grows by exactly the elapsed hours, that the leave time is
/// set, and that the open session marker is cleared.
///
/// Expected: Ok with all four counters increased by 1.5
#[tokio::test]
async fn adds_elapsed_to_all_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let join = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
    let leave = Utc.with_ymd_and_hms(2025, 3, 3, 11, 30, 0).unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .join_time(Some(join))
        .daily_hours(Some(1.0))
        .weekly_hours(Some(2.0))
        .monthly_hours(Some(3.0))
        .all_time_hours(Some(4.0))
        .build()
        .await?;

    let repo = TimeActivityRepository::new(db);
    repo.add_elapsed("S1", "U1", 1.5, leave).await?;

    let record = repo.find("S1", "U1").await?.unwrap();
    assert_hours(record.daily_hours, 2.5);
    assert_hours(record.weekly_hours, 3.5);
    assert_hours(record.monthly_hours, 4.5);
    assert_hours(record.all_time_hours, 5.5);
    assert_eq!(record.leave_time, Some(leave));
    assert_eq!(record.join_time, None);

    Ok(())
}

/// Tests folding a session into a record whose counters are null.
///
/// Expected: Ok with null counters treated as zero
#[tokio::test]
async fn treats_null_counters_as_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .daily_hours(None)
        .weekly_hours(None)
        .monthly_hours(None)
        .all_time_hours(None)
        .build()
        .await?;

    let leave = Utc.with_ymd_and_hms(2025, 3, 3, 11, 0, 0).unwrap();
    let repo = TimeActivityRepository::new(db);
    repo.add_elapsed("S1", "U1", 0.25, leave).await?;

    let record = repo.find("S1", "U1").await?.unwrap();
    assert_hours(record.daily_hours, 0.25);
    assert_hours(record.all_time_hours, 0.25);

    Ok(())
}

/// Tests folding a session for a member with no record.
///
/// Expected: Ok with a new record whose counters all equal the elapsed hours
#[tokio::test]
async fn inserts_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leave = Utc.with_ymd_and_hms(2025, 3, 3, 11, 0, 0).unwrap();
    let repo = TimeActivityRepository::new(db);
    repo.add_elapsed("S1", "U1", 0.75, leave).await?;

    let record = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(
        record,
        SessionRecord {
            server_id: "S1".to_string(),
            user_id: "U1".to_string(),
            join_time: None,
            leave_time: Some(leave),
            daily_hours: 0.75,
            weekly_hours: 0.75,
            monthly_hours: 0.75,
            all_time_hours: 0.75,
        }
    );

    Ok(())
}

/// Tests that other members are untouched by a leave.
///
/// Expected: Ok with the other member's counters unchanged
#[tokio::test]
async fn leaves_other_members_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U2")
        .hours(1.0)
        .build()
        .await?;

    let leave = Utc.with_ymd_and_hms(2025, 3, 3, 11, 0, 0).unwrap();
    let repo = TimeActivityRepository::new(db);
    repo.add_elapsed("S1", "U1", 2.0, leave).await?;

    let other = repo.find("S1", "U2").await?.unwrap();
    assert_eq!(other.daily_hours, 1.0);
    assert_eq!(other.all_time_hours, 1.0);

    Ok(())
}
