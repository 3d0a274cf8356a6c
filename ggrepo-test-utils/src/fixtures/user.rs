//! User fixtures for integration tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::error::TestError;

/// Placeholder bcrypt-shaped hash stored in fixture rows.
pub static TEST_PASSWORD_HASH: &str = "$2b$10$testtesttesttesttesttOeKd1q9C1PqkGmFqGm6x1a";

/// Fixture helper for inserting user rows into the test database.
pub struct UserFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixture<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with the given email and default test values.
    pub async fn insert(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_with_name(email, None).await
    }

    /// Insert a user with the given email and display name.
    pub async fn insert_with_name(
        &self,
        email: &str,
        name: Option<&str>,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.map(str::to_string)),
            password: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Ok(user.insert(self.db).await?)
    }
}

/// Create an in-memory user model with standard test values.
///
/// No database interaction, suitable for unit tests.
pub fn mock_user_model(email: &str) -> entity::user::Model {
    let now = Utc::now().naive_utc();
    entity::user::Model {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: Some("Test User".to_string()),
        password: TEST_PASSWORD_HASH.to_string(),
        created_at: now,
        updated_at: now,
    }
}
