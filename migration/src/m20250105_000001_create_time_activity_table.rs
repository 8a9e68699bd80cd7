use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimeActivity::Table)
                    .if_not_exists()
                    .col(string(TimeActivity::ServerId))
                    .col(string(TimeActivity::UserId))
                    .col(timestamp_null(TimeActivity::JoinTime))
                    .col(timestamp_null(TimeActivity::LeaveTime))
                    .col(double_null(TimeActivity::DailyHours).default(0.0))
                    .col(double_null(TimeActivity::WeeklyHours).default(0.0))
                    .col(double_null(TimeActivity::MonthlyHours).default(0.0))
                    .col(double_null(TimeActivity::AllTimeHours).default(0.0))
                    .primary_key(
                        Index::create()
                            .name("pk_time_activity")
                            .col(TimeActivity::ServerId)
                            .col(TimeActivity::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TimeActivity {
    Table,
    ServerId,
    UserId,
    JoinTime,
    LeaveTime,
    DailyHours,
    WeeklyHours,
    MonthlyHours,
    AllTimeHours,
}
