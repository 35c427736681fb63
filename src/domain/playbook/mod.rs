pub mod content;
pub mod questionnaire;
