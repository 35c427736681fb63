pub mod account_repository;
pub mod sign_off_log;
pub mod sign_off_repository;
