use super::*;

/// Tests the daily rollup.
///
/// Verifies that daily hours are zeroed for every pair across servers while the weekly,
/// monthly and all-time counters are left alone.
///
/// Expected: Ok with only daily counters zeroed
#[tokio::test]
async fn daily_reset_zeroes_only_daily() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (server_id, user_id) in [("S1", "U1"), ("S1", "U2"), ("S2", "U1")] {
        TimeActivityFactory::new(db)
            .server_id(server_id)
            .user_id(user_id)
            .hours(2.0)
            .build()
            .await?;
    }

    let repo = TimeActivityRepository::new(db);
    let updated = repo.reset(RollupPeriod::Daily).await?;
    assert_eq!(updated, 3);

    for model in entity::prelude::TimeActivity::find().all(db).await? {
        let record = SessionRecord::from_entity(model);
        assert_eq!(record.daily_hours, 0.0);
        assert_eq!(record.weekly_hours, 2.0);
        assert_eq!(record.monthly_hours, 2.0);
        assert_eq!(record.all_time_hours, 2.0);
    }

    Ok(())
}

/// Tests running the same reset twice.
///
/// Expected: Ok with daily hours still zero after the second run
#[tokio::test]
async fn reset_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .hours(5.0)
        .build()
        .await?;

    let repo = TimeActivityRepository::new(db);
    repo.reset(RollupPeriod::Daily).await?;
    repo.reset(RollupPeriod::Daily).await?;

    let record = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(record.daily_hours, 0.0);
    assert_eq!(record.weekly_hours, 5.0);

    Ok(())
}

/// Tests that the weekly and monthly resets do not touch each other's columns.
///
/// Expected: Ok with each reset zeroing exactly its own counter
#[tokio::test]
async fn weekly_and_monthly_resets_are_isolated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TimeActivityFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .hours(4.0)
        .build()
        .await?;

    let repo = TimeActivityRepository::new(db);

    repo.reset(RollupPeriod::Weekly).await?;
    let record = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(record.daily_hours, 4.0);
    assert_eq!(record.weekly_hours, 0.0);
    assert_eq!(record.monthly_hours, 4.0);

    repo.reset(RollupPeriod::Monthly).await?;
    let record = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(record.daily_hours, 4.0);
    assert_eq!(record.weekly_hours, 0.0);
    assert_eq!(record.monthly_hours, 0.0);
    assert_eq!(record.all_time_hours, 4.0);

    Ok(())
}

/// Tests a reset on an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reset_on_empty_table_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_voice_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = TimeActivityRepository::new(db)
        .reset(RollupPeriod::Monthly)
        .await?;
    assert_eq!(updated, 0);

    Ok(())
}
