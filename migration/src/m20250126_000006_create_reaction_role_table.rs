use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReactionRole::Table)
                    .if_not_exists()
                    .col(string(ReactionRole::MessageId))
                    .col(string(ReactionRole::Emoji))
                    .col(string(ReactionRole::ServerId))
                    .col(string(ReactionRole::ChannelId))
                    .col(string(ReactionRole::RoleId))
                    .primary_key(
                        Index::create()
                            .name("pk_reaction_role")
                            .col(ReactionRole::MessageId)
                            .col(ReactionRole::Emoji),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reaction_role_server_id")
                    .table(ReactionRole::Table)
                    .col(ReactionRole::ServerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reaction_role_server_id")
                    .table(ReactionRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReactionRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReactionRole {
    Table,
    MessageId,
    Emoji,
    ServerId,
    ChannelId,
    RoleId,
}
