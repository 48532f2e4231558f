//! The in-memory movie catalog.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::core::decode::{DecodeError, DecoderFormat, MovieDecoder};
use crate::core::query::{self, FilterExpr, Operator, Predicate, TextSearch};
use crate::models::{Field, Movie};

/// Loading and querying a collection of movies.
///
/// Only the `add_movies*` methods change state. Queries return new sequences
/// sharing the stored records; the catalog's own order is never affected.
pub trait MediaManager {
    /// Append movies in the given order. Duplicates are kept.
    fn add_movies<I>(&self, movies: I) -> usize
    where
        I: IntoIterator<Item = Movie>;

    /// Decode a byte stream and append the result. Nothing is appended if decoding fails.
    fn add_movies_from_reader<R: Read>(&self, reader: R) -> Result<usize, DecodeError>;

    /// Like [`add_movies_from_reader`](Self::add_movies_from_reader), reading a file.
    fn add_movies_from_path<P: AsRef<Path>>(&self, path: P) -> Result<usize, DecodeError>;

    /// Every movie, in insertion order.
    fn get_movies(&self) -> Vec<Arc<Movie>>;

    /// Movies ordered by `field`. Ascending is stable. Descending is the exact
    /// reverse of ascending, so equal keys come out in reverse insertion order.
    fn sort_movies(&self, field: Field, ascending: bool) -> Vec<Arc<Movie>>;

    /// Movies where any field contains `query`, ignoring case.
    fn search_movies(&self, query: &str) -> Vec<Arc<Movie>>;

    fn filter_movies(&self, field: Field, op: Operator, query: &str) -> Vec<Arc<Movie>>;
}

type Snapshot = Arc<Vec<Arc<Movie>>>;

/// Thread-safe [`MediaManager`].
///
/// Readers take a cheap snapshot (an `Arc` clone) and evaluate outside the
/// lock. Writers append under the write lock, copying the backing vector only
/// when an older snapshot is still alive.
#[derive(Debug)]
pub struct Catalog {
    movies: RwLock<Snapshot>,
    decoder: Box<dyn MovieDecoder>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Empty catalog decoding streams as JSON.
    pub fn new() -> Self {
        Self::with_decoder(DecoderFormat::default().decoder())
    }

    /// Empty catalog using `decoder` for streams and for files with no recognized extension.
    pub fn with_decoder(decoder: Box<dyn MovieDecoder>) -> Self {
        Self {
            movies: RwLock::new(Arc::new(Vec::new())),
            decoder,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Filter with a pre-parsed [`FilterExpr`].
    pub fn filter_expr(&self, expr: &FilterExpr) -> Vec<Arc<Movie>> {
        let predicate = expr.to_predicate();
        self.select(|m| predicate.matches(m))
    }

    fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.movies.read())
    }

    fn append(&self, movies: Vec<Movie>) -> usize {
        let added = movies.len();
        if added == 0 {
            return 0;
        }
        let mut guard = self.movies.write();
        Arc::make_mut(&mut *guard).extend(movies.into_iter().map(Arc::new));
        debug!("Appended {} movies, catalog now holds {}", added, guard.len());
        added
    }

    fn select(&self, keep: impl Fn(&Movie) -> bool) -> Vec<Arc<Movie>> {
        self.snapshot()
            .iter()
            .filter(|m| keep(m))
            .cloned()
            .collect()
    }

    fn decode_and_append(
        &self,
        decoder: &dyn MovieDecoder,
        reader: &mut dyn Read,
        source: &str,
    ) -> Result<usize, DecodeError> {
        let movies = decoder.decode(reader).inspect_err(|e| {
            warn!("Failed to decode movies from {}: {}", source, e);
        })?;
        let added = self.append(movies);
        info!("Loaded {} movies from {}", added, source);
        Ok(added)
    }
}

impl MediaManager for Catalog {
    fn add_movies<I>(&self, movies: I) -> usize
    where
        I: IntoIterator<Item = Movie>,
    {
        self.append(movies.into_iter().collect())
    }

    fn add_movies_from_reader<R: Read>(&self, mut reader: R) -> Result<usize, DecodeError> {
        self.decode_and_append(self.decoder.as_ref(), &mut reader, "stream")
    }

    fn add_movies_from_path<P: AsRef<Path>>(&self, path: P) -> Result<usize, DecodeError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| DecodeError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let by_extension = DecoderFormat::from_path(path).map(DecoderFormat::decoder);
        let decoder = by_extension.as_deref().unwrap_or(self.decoder.as_ref());
        self.decode_and_append(decoder, &mut file, &format!("'{}'", path.display()))
    }

    fn get_movies(&self) -> Vec<Arc<Movie>> {
        self.snapshot().to_vec()
    }

    fn sort_movies(&self, field: Field, ascending: bool) -> Vec<Arc<Movie>> {
        let snapshot = self.snapshot();
        let sorted = query::sort(snapshot.as_slice(), field, ascending);
        debug!("Sorted {} movies by {} (ascending: {})", sorted.len(), field, ascending);
        sorted
    }

    fn search_movies(&self, query: &str) -> Vec<Arc<Movie>> {
        let search = TextSearch::new(query);
        let found = self.select(|m| search.matches(m));
        debug!("Search '{}' matched {} movies", query, found.len());
        found
    }

    fn filter_movies(&self, field: Field, op: Operator, query: &str) -> Vec<Arc<Movie>> {
        let predicate = Predicate::new(field, op, query);
        let found = self.select(|m| predicate.matches(m));
        debug!("Filter {} {} '{}' matched {} movies", field, op, query, found.len());
        found
    }
}

#[cfg(test)]
mod tests;
