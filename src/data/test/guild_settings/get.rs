use super::*;

/// Tests reading a guild that never stored settings.
///
/// Expected: Ok with tracking enabled and no message channel
#[tokio::test]
async fn falls_back_to_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = GuildSettingsRepository::new(db).get("S1").await?;

    assert_eq!(settings.server_id, "S1");
    assert!(settings.camera_tracking);
    assert_eq!(settings.message_channel_id, None);

    Ok(())
}

/// Tests reading stored settings.
///
/// Expected: Ok with the stored values
#[tokio::test]
async fn reads_stored_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .server_id("S1")
        .message_channel_id(Some("T1".to_string()))
        .camera_tracking(false)
        .build()
        .await?;

    let settings = GuildSettingsRepository::new(db).get("S1").await?;

    assert!(!settings.camera_tracking);
    assert_eq!(settings.message_channel_id.as_deref(), Some("T1"));

    Ok(())
}
