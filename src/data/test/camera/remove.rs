use super::*;

/// Tests removing an enforced channel.
///
/// Expected: Ok(true) and the channel no longer enforced
#[tokio::test]
async fn removes_enforced_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let channel = factory::create_camera_channel(db, "S1").await?;
    let repo = CameraRepository::new(db);

    assert!(repo.remove("S1", &channel.channel_id).await?);
    assert!(!repo.is_enforced("S1", &channel.channel_id).await?);

    Ok(())
}

/// Tests removing a channel that was never enforced.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_unknown_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CameraRepository::new(db).remove("S1", "V1").await?);

    Ok(())
}
