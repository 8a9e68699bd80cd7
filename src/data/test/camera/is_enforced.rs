use super::*;

/// Tests that enforcement is scoped to the guild that added the channel.
///
/// Expected: Ok(true) for the owning guild, Ok(false) elsewhere
#[tokio::test]
async fn scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::create_camera_channel(db, "S1").await?;
    let repo = CameraRepository::new(db);

    assert!(repo.is_enforced("S1", &channel.channel_id).await?);
    assert!(!repo.is_enforced("S2", &channel.channel_id).await?);

    Ok(())
}
