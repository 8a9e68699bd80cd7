use super::*;

/// Tests configuring a new session.
///
/// Expected: Ok with an idle session at session 0
#[tokio::test]
async fn creates_idle_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
    let session = PomodoroRepository::new(db)
        .upsert(start_param("S1", "U1"), now)
        .await?;

    assert_eq!(session.session_minutes, 50);
    assert_eq!(session.break_minutes, 10);
    assert_eq!(session.total_sessions, 3);
    assert_eq!(session.current_session, 0);
    assert_eq!(session.state, PomodoroState::Idle);
    assert_eq!(session.phase_ends_at, None);
    assert_eq!(session.created_at, now);

    Ok(())
}

/// Tests reconfiguring a running session.
///
/// Verifies that the previous progress is discarded and the new configuration stored.
///
/// Expected: Ok with the new configuration and progress reset
#[tokio::test]
async fn replaces_running_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PomodoroSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PomodoroSessionFactory::new(db)
        .server_id("S1")
        .user_id("U1")
        .current_session(2)
        .current_state("focus")
        .build()
        .await?;

    let session = PomodoroRepository::new(db)
        .upsert(start_param("S1", "U1"), Utc::now())
        .await?;

    assert_eq!(session.session_minutes, 50);
    assert_eq!(session.current_session, 0);
    assert_eq!(session.state, PomodoroState::Idle);

    Ok(())
}
