use super::*;

/// Tests reading a member without a session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PomodoroRepository::new(db).find("S1", "U1").await?.is_none());

    Ok(())
}

/// Tests reading a session whose stored state is corrupt.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PomodoroSessionFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .current_state("nap")
        .build()
        .await?;

    let result = PomodoroRepository::new(db).find("S1", "U1").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
