//! Repository fixtures for integration tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::error::TestError;

/// Fixture helper for inserting repository rows into the test database.
pub struct RepositoryFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RepositoryFixture<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a repository owned by `user_id` with default test values.
    pub async fn insert(
        &self,
        user_id: Uuid,
        name: &str,
    ) -> Result<entity::repository::Model, TestError> {
        let now = Utc::now().naive_utc();

        let repository = entity::repository::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            url: ActiveValue::Set(format!("https://github.com/test/{name}")),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Ok(repository.insert(self.db).await?)
    }
}
