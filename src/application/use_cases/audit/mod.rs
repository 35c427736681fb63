pub mod select_domain;
pub mod summarize_responses;
