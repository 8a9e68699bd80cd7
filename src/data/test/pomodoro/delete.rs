use super::*;

/// Tests stopping a session.
///
/// Expected: Ok(true) on the first delete and Ok(false) on the second
#[tokio::test]
async fn deletes_member_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PomodoroSessionFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .build()
        .await?;
    PomodoroSessionFactory::new(db)
        .server_id("S1")
        .user_id("U2")
        .build()
        .await?;

    let repo = PomodoroRepository::new(db);

    assert!(repo.delete("S1", "U1").await?);
    assert!(!repo.delete("S1", "U1").await?);
    assert!(repo.find("S1", "U2").await?.is_some());

    Ok(())
}

/// Tests clearing stale sessions left by a previous process.
///
/// Expected: Ok with every row removed
#[tokio::test]
async fn deletes_all_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        PomodoroSessionFactory::new(db).build().await?;
    }

    let removed = PomodoroRepository::new(db).delete_all().await?;

    assert_eq!(removed, 3);

    Ok(())
}
