use std::collections::HashMap;
use std::num::{IntErrorKind, ParseIntError};

use crate::domain::scoring::score::{self, ScoreInput, ScoreResult, Section};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreInputError {
    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },
    #[error("{field} must be between 0 and {max}")]
    OutOfRange { field: &'static str, max: u32 },
}

impl ScoreInputError {
    pub fn field(&self) -> &'static str {
        match self {
            ScoreInputError::NotANumber { field } | ScoreInputError::OutOfRange { field, .. } => {
                *field
            }
        }
    }
}

/// Parses the four section fields; absent or blank fields count as zero.
pub fn parse_score_input(form: &HashMap<String, String>) -> Result<ScoreInput, ScoreInputError> {
    let mut input = ScoreInput::default();
    for section in Section::ALL {
        let field = section.field();
        let raw = form.get(field).map(|s| s.trim()).unwrap_or("");
        let value = if raw.is_empty() {
            0
        } else {
            let out_of_range = ScoreInputError::OutOfRange {
                field,
                max: section.max(),
            };
            let parsed: i64 = raw.parse().map_err(|e: ParseIntError| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range.clone(),
                _ => ScoreInputError::NotANumber { field },
            })?;
            if parsed < 0 || parsed > i64::from(section.max()) {
                return Err(out_of_range);
            }
            parsed as u32
        };
        input.set(section, value);
    }
    Ok(input)
}

pub fn calculate_score(form: &HashMap<String, String>) -> Result<ScoreResult, ScoreInputError> {
    let input = parse_score_input(form)?;
    Ok(score::evaluate(&input))
}
