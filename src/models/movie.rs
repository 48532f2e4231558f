use std::borrow::Cow;
use std::fmt;

use chrono::Datelike;
use thiserror::Error;

use super::{Field, MediaType, Rating};

/// Earliest release year accepted by [`Movie::validate`].
pub const EARLIEST_YEAR: i16 = 1880;
/// How many years past the current one a release may be announced for.
pub const FUTURE_YEAR_SLACK: i16 = 5;

/// One movie a person owns a copy of.
///
/// Immutable once built: fields are private and only exposed through getters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Movie {
    title: String,
    description: String,
    /// Credit order. May be an abbreviated cast.
    actors: Vec<String>,
    year: i16,
    rating: Rating,
    media: MediaType,
}

/// Typed value of a single [`Field`], as returned by [`Movie::field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    TextList(&'a [String]),
    Year(i16),
    Rating(Rating),
    Media(MediaType),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MovieError {
    #[error("title is blank")]
    BlankTitle,

    #[error("actor #{index} has a blank name")]
    BlankActor { index: usize },

    #[error("year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i16, min: i16, max: i16 },
}

impl Movie {
    pub fn new<A, S>(
        title: impl Into<String>,
        description: impl Into<String>,
        actors: A,
        year: i16,
        rating: Rating,
        media: MediaType,
    ) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            actors: actors.into_iter().map(Into::into).collect(),
            year,
            rating,
            media,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn media(&self) -> MediaType {
        self.media
    }

    /// Pick a field at runtime.
    pub fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Title => FieldValue::Text(&self.title),
            Field::Description => FieldValue::Text(&self.description),
            Field::Actors => FieldValue::TextList(&self.actors),
            Field::Year => FieldValue::Year(self.year),
            Field::Rating => FieldValue::Rating(self.rating),
            Field::Media => FieldValue::Media(self.media),
        }
    }

    /// Check the record against what a decoded catalog entry must look like.
    ///
    /// Directly constructed movies are trusted; decoders call this on every record.
    pub fn validate(&self) -> Result<(), MovieError> {
        if self.title.trim().is_empty() {
            return Err(MovieError::BlankTitle);
        }
        if let Some(index) = self.actors.iter().position(|a| a.trim().is_empty()) {
            return Err(MovieError::BlankActor { index });
        }
        let max = latest_plausible_year();
        if !(EARLIEST_YEAR..=max).contains(&self.year) {
            return Err(MovieError::YearOutOfRange {
                year: self.year,
                min: EARLIEST_YEAR,
                max,
            });
        }
        Ok(())
    }
}

fn latest_plausible_year() -> i16 {
    let current = i16::try_from(chrono::Utc::now().year()).unwrap_or(i16::MAX);
    current.saturating_add(FUTURE_YEAR_SLACK)
}

impl FieldValue<'_> {
    /// Canonical text of a scalar value; `None` for the actor list, which is matched per name.
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s)),
            FieldValue::TextList(_) => None,
            FieldValue::Year(y) => Some(Cow::Owned(y.to_string())),
            FieldValue::Rating(r) => Some(Cow::Borrowed(r.as_str())),
            FieldValue::Media(m) => Some(Cow::Borrowed(m.as_str())),
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}, {}]",
            self.title, self.year, self.rating, self.media
        )?;
        if !self.actors.is_empty() {
            write!(f, " actors: {}", self.actors.join(", "))?;
        }
        Ok(())
    }
}
