pub use super::repository::Entity as Repository;
pub use super::user::Entity as User;
