mod repository;
mod user;
