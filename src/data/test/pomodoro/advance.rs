use super::*;

/// Tests persisting a phase change.
///
/// Expected: Ok(true) with the new session index, state and phase end stored
#[tokio::test]
async fn persists_phase() -> Result<(), AppError> {
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

    let ends_at = Utc.with_ymd_and_hms(2025, 3, 3, 10, 25, 0).unwrap();
    let repo = PomodoroRepository::new(db);
    let advanced = repo
        .advance("S1", "U1", 1, PomodoroState::Focus, Some(ends_at))
        .await?;

    assert!(advanced);
    let session = repo.find("S1", "U1").await?.unwrap();
    assert_eq!(session.current_session, 1);
    assert_eq!(session.state, PomodoroState::Focus);
    assert_eq!(session.phase_ends_at, Some(ends_at));

    Ok(())
}

/// Tests advancing a session that was stopped.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn reports_missing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PomodoroRepository::new(db);
    let advanced = repo
        .advance("S1", "U1", 1, PomodoroState::Focus, None)
        .await?;

    assert!(!advanced);
    assert!(repo.find("S1", "U1").await?.is_none());

    Ok(())
}
