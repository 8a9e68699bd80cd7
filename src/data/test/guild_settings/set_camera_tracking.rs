use super::*;

/// Tests toggling enforcement.
///
/// Verifies that the message channel survives both toggles.
///
/// Expected: Ok with the flag following each call
#[tokio::test]
async fn toggles_without_clearing_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.set_message_channel("S1", "T1").await?;

    repo.set_camera_tracking("S1", false).await?;
    let settings = repo.get("S1").await?;
    assert!(!settings.camera_tracking);
    assert_eq!(settings.message_channel_id.as_deref(), Some("T1"));

    repo.set_camera_tracking("S1", true).await?;
    let settings = repo.get("S1").await?;
    assert!(settings.camera_tracking);
    assert_eq!(settings.message_channel_id.as_deref(), Some("T1"));

    Ok(())
}
