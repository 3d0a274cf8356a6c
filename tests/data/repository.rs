//! Tests for the repository data access layer.
//!
//! Covers creation, per-user listing, and the deliberate absence of a foreign
//! key on `user_id`.

use ggrepo::{data::repository::RepositoryRepository, model::repository::NewRepository};
use ggrepo_test_utils::prelude::*;
use uuid::Uuid;

fn new_repository(user_id: Uuid, name: &str) -> NewRepository {
    NewRepository {
        name: name.to_string(),
        description: None,
        url: format!("https://github.com/dev/{name}"),
        user_id,
    }
}

/// Tests inserting a repository and reading it back by id.
#[tokio::test]
async fn create_and_find_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let user = test.users().insert("dev@example.com").await?;
    let repositories = RepositoryRepository::new(&test.db);

    let created = repositories
        .create(new_repository(user.id, "ggrepo"))
        .await?;
    assert_eq!(created.name, "ggrepo");
    assert_eq!(created.user_id, user.id);

    let found = repositories.find_by_id(created.id).await?;
    assert_eq!(found.map(|repo| repo.id), Some(created.id));

    Ok(())
}

/// Tests that listing filters to the requested owner.
#[tokio::test]
async fn list_by_user_id_filters_by_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let alice = test.users().insert("alice@example.com").await?;
    let bob = test.users().insert("bob@example.com").await?;
    let repositories = RepositoryRepository::new(&test.db);

    repositories
        .create(new_repository(alice.id, "alpha"))
        .await?;
    repositories
        .create(new_repository(alice.id, "beta"))
        .await?;
    repositories
        .create(new_repository(bob.id, "gamma"))
        .await?;

    let owned = repositories.list_by_user_id(alice.id).await?;
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|repo| repo.user_id == alice.id));

    Ok(())
}

/// Tests that `user_id` is not enforced as a foreign key.
///
/// Expected: inserting a repository for a nonexistent user succeeds.
#[tokio::test]
async fn insert_with_unknown_user_id_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let repositories = RepositoryRepository::new(&test.db);

    let orphan = repositories
        .create(new_repository(Uuid::new_v4(), "orphan"))
        .await?;
    assert_eq!(orphan.name, "orphan");

    Ok(())
}
