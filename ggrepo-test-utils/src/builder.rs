//! Declarative test builder.
//!
//! Configures the test environment before execution: database tables to create and
//! fixture rows to insert are queued on the builder and executed by `build()`.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_service_tables: bool,
    users: Vec<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_service_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the standard service tables (`users`, `repositories`) to the test database.
    pub fn with_tables(mut self) -> Self {
        self.include_service_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a user row with the given email to be inserted during `build()`.
    pub fn with_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Execute all queued operations and return the test context.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut tables = self.tables;
        if self.include_service_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::User));
            tables.push(schema.create_table_from_entity(entity::prelude::Repository));
        }

        context.with_tables(tables).await?;

        for email in &self.users {
            context.users().insert(email).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
