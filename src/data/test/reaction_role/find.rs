use super::*;

/// Tests that bindings are keyed on both message and emoji.
///
/// Expected: Ok(None) for a different emoji on the same message
#[tokio::test]
async fn keyed_on_message_and_emoji() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_reaction_role(db, "S1", "👍").await?;
    let repo = ReactionRoleRepository::new(db);

    assert!(repo.find(&stored.message_id, "👍").await?.is_some());
    assert!(repo.find(&stored.message_id, "🎉").await?.is_none());

    Ok(())
}
