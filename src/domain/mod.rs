pub mod accounts;
pub mod playbook;
pub mod scoring;
