//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for test execution.
//! The context wraps an in-memory SQLite database and exposes fixture helpers for
//! inserting users and repositories.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{repository::RepositoryFixture, user::UserFixture},
};

/// Test context returned by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// Holds the in-memory database connection used by the test. Fixture helpers are
/// available via [`TestContext::users`] and [`TestContext::repositories`].
///
/// ```ignore
/// let test = TestBuilder::new().with_tables().build().await?;
///
/// let user = test.users().insert("dev@example.com").await?;
/// test.repositories().insert(user.id, "ggrepo").await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from the given CREATE TABLE statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixture helper for inserting user rows.
    pub fn users(&self) -> UserFixture<'_> {
        UserFixture::new(&self.db)
    }

    /// Fixture helper for inserting repository rows.
    pub fn repositories(&self) -> RepositoryFixture<'_> {
        RepositoryFixture::new(&self.db)
    }

    /// Convert the test database into any state type constructible from a connection.
    ///
    /// This allows conversion to the application's state struct without creating a
    /// circular dependency between the test-utils crate and the main ggrepo crate.
    ///
    /// ```ignore
    /// let state: AppState = test.into_app_state();
    /// ```
    pub fn into_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}
