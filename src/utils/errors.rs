use thiserror::Error;

use crate::core::decode::DecodeError;
use crate::core::query::ExprError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Failed to load movies: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("Invalid filter expression: {0}")]
    ExprError(#[from] ExprError),
}
