//! Repository domain models: validated input and client-facing DTO.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::model::db::RepositoryModel;

/// Validated payload for creating a repository record.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct NewRepositoryDto {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub url: String,
    pub user_id: Uuid,
}

/// Parameters for inserting a repository row.
pub struct NewRepository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub user_id: Uuid,
}

impl From<NewRepositoryDto> for NewRepository {
    fn from(dto: NewRepositoryDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            url: dto.url,
            user_id: dto.user_id,
        }
    }
}

/// Client-facing repository representation.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<RepositoryModel> for RepositoryDto {
    fn from(model: RepositoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            url: model.url,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
