use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RollupCheckpoint::Table)
                    .if_not_exists()
                    .col(string(RollupCheckpoint::Period).primary_key())
                    .col(timestamp(RollupCheckpoint::LastResetAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RollupCheckpoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RollupCheckpoint {
    Table,
    Period,
    LastResetAt,
}
