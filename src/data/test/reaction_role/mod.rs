use crate::{data::reaction_role::ReactionRoleRepository, model::reaction_role::ReactionRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;

fn binding(message_id: &str, emoji: &str, role_id: &str) -> ReactionRole {
    ReactionRole {
        message_id: message_id.to_string(),
        emoji: emoji.to_string(),
        server_id: "S1".to_string(),
        channel_id: "C1".to_string(),
        role_id: role_id.to_string(),
    }
}
