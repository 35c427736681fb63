pub mod account_repository_sqlx;
pub mod sign_off_repository_sqlx;
