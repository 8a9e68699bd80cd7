use super::*;

/// Tests adding a channel twice.
///
/// Expected: Ok(true) the first time, Ok(false) the second
#[tokio::test]
async fn adds_channel_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camera_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CameraRepository::new(db);

    assert!(repo.add("S1", "V1").await?);
    assert!(!repo.add("S1", "V1").await?);
    assert!(repo.is_enforced("S1", "V1").await?);

    Ok(())
}
