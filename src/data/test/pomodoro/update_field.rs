use super::*;

/// Tests editing each configurable column.
///
/// Expected: Ok(true) with exactly the targeted column changed
#[tokio::test]
async fn updates_targeted_column() -> Result<(), AppError> {
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

    let repo = PomodoroRepository::new(db);

    assert!(repo
        .update_field("S1", "U1", PomodoroField::SessionTime, 45)
        .await?);
    assert!(repo
        .update_field("S1", "U1", PomodoroField::BreakTime, 15)
        .await?);
    assert!(repo
        .update_field("S1", "U1", PomodoroField::NumberOfSessions, 6)
        .await?);

    let session = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(session.session_minutes, 45);
    assert_eq!(session.break_minutes, 15);
    assert_eq!(session.total_sessions, 6);
    assert_eq!(session.current_session, 0);

    Ok(())
}

/// Tests editing without a session.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PomodoroRepository::new(db)
        .update_field("S1", "U1", PomodoroField::BreakTime, 10)
        .await?;

    assert!(!updated);

    Ok(())
}
