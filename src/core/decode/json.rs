use std::io::{BufReader, Read};

use serde::Deserialize;

use super::{validate_all, DecodeError, MovieDecoder};
use crate::models::{MediaType, Movie, Rating};

/// Reads a JSON array of movie objects:
///
/// ```json
/// [{ "title": "Alien", "description": "...", "actors": ["Sigourney Weaver"],
///    "year": 1979, "rating": "R", "media": "Blu-ray" }]
/// ```
///
/// `description` and `actors` may be omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

#[derive(Debug, Deserialize)]
struct MovieRecord {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    actors: Vec<String>,
    year: i16,
    rating: Rating,
    media: MediaType,
}

impl From<MovieRecord> for Movie {
    fn from(r: MovieRecord) -> Self {
        Movie::new(r.title, r.description, r.actors, r.year, r.rating, r.media)
    }
}

impl MovieDecoder for JsonDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Movie>, DecodeError> {
        let records: Vec<MovieRecord> = serde_json::from_reader(BufReader::new(reader))?;
        validate_all(records.into_iter().map(Movie::from).collect())
    }
}
