use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::models::{Field, Movie};

/// Order two movies by a single field.
///
/// - Title and description: case-sensitive, code-point order.
/// - Actors: by the first credited actor; an empty cast sorts first.
/// - Year: numeric.
/// - Rating and media: declaration order of the enum, not alphabetical.
pub fn compare(a: &Movie, b: &Movie, field: Field) -> Ordering {
    match field {
        Field::Title => a.title().cmp(b.title()),
        Field::Description => a.description().cmp(b.description()),
        Field::Actors => a.actors().first().cmp(&b.actors().first()),
        Field::Year => a.year().cmp(&b.year()),
        Field::Rating => a.rating().cmp(&b.rating()),
        Field::Media => a.media().cmp(&b.media()),
    }
}

/// Stable in-place sort. Descending is the exact reversal of ascending, so
/// equal keys come out in reverse input order when `ascending` is false.
pub fn sort_in_place<M: Borrow<Movie>>(movies: &mut [M], field: Field, ascending: bool) {
    movies.sort_by(|a, b| {
        compare(
            <M as Borrow<Movie>>::borrow(a),
            <M as Borrow<Movie>>::borrow(b),
            field,
        )
    });
    if !ascending {
        movies.reverse();
    }
}

/// Sorted copy of `movies`; the input is left untouched.
pub fn sort<M: Borrow<Movie> + Clone>(movies: &[M], field: Field, ascending: bool) -> Vec<M> {
    let mut sorted = movies.to_vec();
    sort_in_place(&mut sorted, field, ascending);
    sorted
}
