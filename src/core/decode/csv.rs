use std::io::Read;

use ::csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use super::{validate_all, DecodeError, MovieDecoder};
use crate::models::{MediaType, Movie, Rating};

/// Separates actor names inside the single `actors` column.
pub const ACTOR_SEPARATOR: char = '|';

/// Reads CSV with a header row `title,description,actors,year,rating,media`.
///
/// Actors share one column, separated by `|`, in credit order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder;

#[derive(Debug, Deserialize)]
struct MovieRow {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    actors: String,
    year: i16,
    rating: Rating,
    media: MediaType,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let actors: Vec<String> = if row.actors.trim().is_empty() {
            Vec::new()
        } else {
            row.actors
                .split(ACTOR_SEPARATOR)
                .map(|a| a.trim().to_string())
                .collect()
        };
        Movie::new(row.title, row.description, actors, row.year, row.rating, row.media)
    }
}

impl MovieDecoder for CsvDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Movie>, DecodeError> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        // deserialize() swallows header read errors, so read them up front
        rdr.headers()?;
        let mut movies = Vec::new();
        for row in rdr.deserialize::<MovieRow>() {
            movies.push(Movie::from(row?));
        }
        validate_all(movies)
    }
}
