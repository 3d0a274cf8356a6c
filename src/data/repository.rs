use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::{db::RepositoryModel, repository::NewRepository};

pub struct RepositoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RepositoryRepository<'a> {
    /// Creates a new instance of [`RepositoryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new repository record with a server-generated random id.
    ///
    /// `user_id` is an unowned reference: the schema enforces no foreign key,
    /// so inserting with a nonexistent user succeeds.
    pub async fn create(&self, params: NewRepository) -> Result<RepositoryModel, DbErr> {
        let now = Utc::now().naive_utc();

        let repository = entity::repository::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            url: ActiveValue::Set(params.url),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        repository.insert(self.db).await
    }

    /// Finds a repository by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RepositoryModel>, DbErr> {
        entity::prelude::Repository::find_by_id(id).one(self.db).await
    }

    /// Lists all repositories owned by the given user, oldest first.
    pub async fn list_by_user_id(&self, user_id: Uuid) -> Result<Vec<RepositoryModel>, DbErr> {
        entity::prelude::Repository::find()
            .filter(entity::repository::Column::UserId.eq(user_id))
            .order_by_asc(entity::repository::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
