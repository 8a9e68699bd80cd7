use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PomodoroSession::Table)
                    .if_not_exists()
                    .col(string(PomodoroSession::ServerId))
                    .col(string(PomodoroSession::UserId))
                    .col(string(PomodoroSession::ChannelId))
                    .col(integer(PomodoroSession::SessionMinutes))
                    .col(integer(PomodoroSession::BreakMinutes))
                    .col(integer(PomodoroSession::TotalSessions))
                    .col(integer(PomodoroSession::CurrentSession).default(0))
                    .col(string(PomodoroSession::CurrentState).default("idle"))
                    .col(timestamp_null(PomodoroSession::PhaseEndsAt))
                    .col(timestamp(PomodoroSession::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_pomodoro_session")
                            .col(PomodoroSession::ServerId)
                            .col(PomodoroSession::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PomodoroSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PomodoroSession {
    Table,
    ServerId,
    UserId,
    ChannelId,
    SessionMinutes,
    BreakMinutes,
    TotalSessions,
    CurrentSession,
    CurrentState,
    PhaseEndsAt,
    CreatedAt,
}
