use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::{db::UserModel, user::NewUser};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a server-generated random id.
    ///
    /// Timestamps are set to the insertion time; they are not auto-updated by
    /// any later mechanism. A duplicate email surfaces as a unique constraint
    /// violation from the database.
    pub async fn create(&self, params: NewUser) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            password: ActiveValue::Set(params.password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        user.insert(self.db).await
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by their unique email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Lists all users, oldest first.
    pub async fn list(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
