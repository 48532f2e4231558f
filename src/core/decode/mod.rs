//! Turning raw bytes into validated [`Movie`] records.
//!
//! The catalog only knows the [`MovieDecoder`] shape; JSON and CSV decoders are
//! provided and picked by file extension through [`DecoderFormat`].

mod csv;
mod json;

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Movie, MovieError};

pub use self::csv::CsvDecoder;
pub use self::json::JsonDecoder;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read movie data: {0}")]
    Io(#[from] io::Error),

    #[error("malformed JSON movie data: {0}")]
    Json(#[source] serde_json::Error),

    #[error("malformed CSV movie data: {0}")]
    Csv(#[source] ::csv::Error),

    #[error("record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: MovieError,
    },

    #[error("unsupported movie file format: '{0}'")]
    UnsupportedFormat(String),
}

// Read failures surface as `Io` whichever parser hit them.
impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            DecodeError::Io(io::Error::from(e))
        } else {
            DecodeError::Json(e)
        }
    }
}

impl From<::csv::Error> for DecodeError {
    fn from(e: ::csv::Error) -> Self {
        if !e.is_io_error() {
            return DecodeError::Csv(e);
        }
        match e.into_kind() {
            ::csv::ErrorKind::Io(source) => DecodeError::Io(source),
            kind => DecodeError::Io(io::Error::other(format!("{kind:?}"))),
        }
    }
}

/// Converts a byte stream into movie records, all or nothing.
pub trait MovieDecoder: fmt::Debug + Send + Sync {
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Movie>, DecodeError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoderFormat {
    #[default]
    Json,
    Csv,
}

impl DecoderFormat {
    /// Guess the format from a file extension; `None` when it is missing or unknown.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn decoder(self) -> Box<dyn MovieDecoder> {
        match self {
            DecoderFormat::Json => Box::new(JsonDecoder),
            DecoderFormat::Csv => Box::new(CsvDecoder),
        }
    }
}

impl std::str::FromStr for DecoderFormat {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(DecoderFormat::Json),
            "csv" => Ok(DecoderFormat::Csv),
            _ => Err(DecodeError::UnsupportedFormat(s.to_string())),
        }
    }
}

fn validate_all(movies: Vec<Movie>) -> Result<Vec<Movie>, DecodeError> {
    for (index, movie) in movies.iter().enumerate() {
        movie
            .validate()
            .map_err(|source| DecodeError::InvalidRecord { index, source })?;
    }
    Ok(movies)
}

#[cfg(test)]
pub(crate) struct FailingReader;

#[cfg(test)]
impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk gone"))
    }
}
