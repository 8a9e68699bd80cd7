use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CameraChannel::Table)
                    .if_not_exists()
                    .col(string(CameraChannel::ServerId))
                    .col(string(CameraChannel::ChannelId))
                    .primary_key(
                        Index::create()
                            .name("pk_camera_channel")
                            .col(CameraChannel::ServerId)
                            .col(CameraChannel::ChannelId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CameraChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CameraChannel {
    Table,
    ServerId,
    ChannelId,
}
