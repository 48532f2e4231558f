pub mod field;
pub mod media_type;
pub mod movie;
pub mod rating;

pub use field::Field;
pub use media_type::MediaType;
pub use movie::{FieldValue, Movie, MovieError};
pub use rating::Rating;

use thiserror::Error;

/// Returned when a textual value does not name any variant of a closed enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Uppercase and drop the separators people type inconsistently ("PG-13", "pg_13", "Blu ray").
pub(crate) fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' ' | '.'))
        .flat_map(char::to_uppercase)
        .collect()
}
