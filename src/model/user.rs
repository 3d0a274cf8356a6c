//! User domain models: validated input and client-facing DTO.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::model::db::UserModel;

/// Validated payload for creating a user.
///
/// The insert-side counterpart of the `users` table. `password` is expected to be
/// hashed by the caller before the record reaches the data layer.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct NewUserDto {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

/// Parameters for inserting a user row.
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

impl From<NewUserDto> for NewUser {
    fn from(dto: NewUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            password: dto.password,
        }
    }
}

/// Client-facing user representation. The password hash is never exposed.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserModel> for UserDto {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
