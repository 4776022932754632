pub mod user_repository;
pub mod user_token_repository;

pub use user_repository::*;
pub use user_token_repository::*;
