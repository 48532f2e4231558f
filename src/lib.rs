//! A personal movie collection, held in memory.
//!
//! [`Catalog`] owns the records and implements [`MediaManager`]: bulk loading
//! (directly or through a [`MovieDecoder`]), sorting, free-text search and
//! single-field filtering.

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::catalog::{Catalog, MediaManager};
pub use crate::core::decode::{CsvDecoder, DecodeError, DecoderFormat, JsonDecoder, MovieDecoder};
pub use crate::core::query::{FilterExpr, Operator};
pub use crate::models::{Field, FieldValue, MediaType, Movie, Rating};
