//! Tests for the user repository.
//!
//! Covers creation, lookup by id and email, listing order, and the mapping of
//! a duplicate-email violation to a conflict response.

use axum::http::StatusCode;
use ggrepo::{
    data::user::UserRepository,
    error::{AppError, CODE_DUPLICATE_RESOURCE},
    model::user::NewUser,
};
use ggrepo_test_utils::prelude::*;
use uuid::Uuid;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: Some("Dev".to_string()),
        password: "hashed-password-value".to_string(),
    }
}

/// Tests inserting a user and reading it back by id.
///
/// Expected: the stored row carries the given email and a generated id.
#[tokio::test]
async fn create_and_find_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let users = UserRepository::new(&test.db);

    let created = users.create(new_user("dev@example.com")).await?;
    assert_eq!(created.email, "dev@example.com");
    assert_eq!(created.name.as_deref(), Some("Dev"));

    let found = users.find_by_id(created.id).await?;
    assert_eq!(found.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests email lookup for present and absent addresses.
///
/// Expected: Some for a stored email, None otherwise.
#[tokio::test]
async fn find_by_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_user("dev@example.com")
        .build()
        .await?;
    let users = UserRepository::new(&test.db);

    let found = users.find_by_email("dev@example.com").await?;
    assert!(found.is_some());

    let missing = users.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that find_by_id returns None for an unknown id.
#[tokio::test]
async fn find_by_id_returns_none_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let users = UserRepository::new(&test.db);

    let found = users.find_by_id(Uuid::new_v4()).await?;
    assert!(found.is_none());

    Ok(())
}

/// Tests that listing returns every stored user.
#[tokio::test]
async fn list_returns_all_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let users = UserRepository::new(&test.db);

    users.create(new_user("first@example.com")).await?;
    users.create(new_user("second@example.com")).await?;

    let all = users.list().await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that a duplicate email maps to a conflict response.
///
/// Expected: the database error classifies as 409 with the duplicate code.
#[tokio::test]
async fn duplicate_email_maps_to_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;
    let users = UserRepository::new(&test.db);

    users.create(new_user("dev@example.com")).await?;
    let err = users
        .create(new_user("dev@example.com"))
        .await
        .expect_err("second insert with the same email must fail");

    let parts = AppError::from(err).parts();
    assert_eq!(parts.status, StatusCode::CONFLICT);
    assert_eq!(parts.code, CODE_DUPLICATE_RESOURCE);

    Ok(())
}
