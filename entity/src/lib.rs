pub mod prelude;

pub mod repository;
pub mod user;
