use super::*;

/// Tests setting the message channel on a guild with tracking disabled.
///
/// Verifies that the upsert only touches the message channel column.
///
/// Expected: Ok with the channel stored and tracking still disabled
#[tokio::test]
async fn keeps_tracking_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .server_id("S1")
        .camera_tracking(false)
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    repo.set_message_channel("S1", "T2").await?;

    let settings = repo.get("S1").await?;
    assert_eq!(settings.message_channel_id.as_deref(), Some("T2"));
    assert!(!settings.camera_tracking);

    Ok(())
}

/// Tests setting the message channel on a guild without settings.
///
/// Expected: Ok with the channel stored and tracking at its default
#[tokio::test]
async fn creates_settings_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.set_message_channel("S1", "T1").await?;

    let settings = repo.get("S1").await?;
    assert_eq!(settings.message_channel_id.as_deref(), Some("T1"));
    assert!(settings.camera_tracking);

    Ok(())
}
