//! Repository interfaces implemented by the infrastructure layer

pub mod user_repository;

pub use user_repository::UserRepository;
