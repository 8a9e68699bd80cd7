use super::*;

/// Tests binding an emoji to a role.
///
/// Expected: Ok with the binding readable by (message, emoji)
#[tokio::test]
async fn stores_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    repo.create(binding("M1", "👍", "R1")).await?;

    assert_eq!(repo.find("M1", "👍").await?, Some(binding("M1", "👍", "R1")));

    Ok(())
}

/// Tests rebinding the same emoji on the same message.
///
/// Expected: Ok with the newer role replacing the older one
#[tokio::test]
async fn replaces_existing_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ReactionRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReactionRoleRepository::new(db);
    repo.create(binding("M1", "👍", "R1")).await?;
    repo.create(binding("M1", "👍", "R2")).await?;

    let stored = repo.find("M1", "👍").await?.unwrap();
    assert_eq!(stored.role_id, "R2");

    Ok(())
}
