//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so the rest of the crate does not
//! import from the generated `entity` crate directly.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, random UUID generated on insert
/// - `email` - Unique email address
/// - `name` - Optional display name
/// - `password` - Password hash (never serialized to clients)
/// - `created_at` / `updated_at` - Set on creation, not auto-updated
pub type UserModel = entity::user::Model;

/// Type alias for the repository database model.
///
/// # Fields (from `entity::repository::Model`)
/// - `id` - Primary key, random UUID generated on insert
/// - `name` - Repository name
/// - `description` - Optional description
/// - `url` - Repository URL
/// - `user_id` - Owning user id (no database-level foreign key)
/// - `created_at` / `updated_at` - Set on creation, not auto-updated
pub type RepositoryModel = entity::repository::Model;
