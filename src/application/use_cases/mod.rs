pub mod audit;
pub mod auth;
pub mod scoring;
pub mod sign_off;
