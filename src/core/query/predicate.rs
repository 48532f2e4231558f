use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{normalize_token, Field, FieldValue, MediaType, Movie, ParseValueError, Rating};
use crate::utils::text::{contains_folded, fold};

/// How a field value is compared against a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Case-insensitive substring. Numbers and enums are rendered to their
    /// canonical text first; for actors any single name may contain the query.
    Contains,
    /// Exact match. Case-sensitive for text.
    Equals,
    /// Code-point order for text, numeric for years, declaration order for enums.
    LessThan,
    GreaterThan,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Contains => "contains",
            Operator::Equals => "equals",
            Operator::LessThan => "less_than",
            Operator::GreaterThan => "greater_than",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "CONTAINS" | "~" => Ok(Operator::Contains),
            "EQUALS" | "EQ" | "=" | "==" => Ok(Operator::Equals),
            "LESSTHAN" | "LT" | "<" => Ok(Operator::LessThan),
            "GREATERTHAN" | "GT" | ">" => Ok(Operator::GreaterThan),
            _ => Err(ParseValueError::new("operator", s)),
        }
    }
}

/// A single `field op query` test, with the query pre-processed once so it
/// can be evaluated against a whole catalog.
///
/// Evaluation never fails: a query that does not parse as the field's type
/// simply matches nothing.
#[derive(Debug, Clone)]
pub struct Predicate {
    field: Field,
    op: Operator,
    query: String,
    folded: String,
}

impl Predicate {
    pub fn new(field: Field, op: Operator, query: impl Into<String>) -> Self {
        let query = query.into();
        let folded = fold(&query);
        Self {
            field,
            op,
            query,
            folded,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        let value = movie.field(self.field);
        match self.op {
            Operator::Contains => contains(value, &self.folded),
            Operator::Equals => match value {
                FieldValue::TextList(actors) => actors.iter().any(|a| *a == self.query),
                _ => order_against(value, &self.query) == Some(Ordering::Equal),
            },
            Operator::LessThan => order_against(value, &self.query) == Some(Ordering::Less),
            Operator::GreaterThan => order_against(value, &self.query) == Some(Ordering::Greater),
        }
    }
}

/// Free-text search: a movie matches when any field contains the query,
/// ignoring case.
#[derive(Debug, Clone)]
pub struct TextSearch {
    folded: String,
}

impl TextSearch {
    pub fn new(query: &str) -> Self {
        Self { folded: fold(query) }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        Field::ALL
            .iter()
            .any(|field| contains(movie.field(*field), &self.folded))
    }
}

/// Evaluate one predicate without keeping it around.
pub fn matches(movie: &Movie, field: Field, op: Operator, query: &str) -> bool {
    Predicate::new(field, op, query).matches(movie)
}

/// Evaluate a free-text search without keeping it around.
pub fn matches_text(movie: &Movie, query: &str) -> bool {
    TextSearch::new(query).matches(movie)
}

fn contains(value: FieldValue<'_>, folded_query: &str) -> bool {
    match value {
        FieldValue::TextList(actors) => actors.iter().any(|a| contains_folded(a, folded_query)),
        _ => value
            .render()
            .is_some_and(|text| contains_folded(&text, folded_query)),
    }
}

/// Where the field value sits relative to the query, or `None` when the
/// query is not a value of the field's type or the field has no order.
fn order_against(value: FieldValue<'_>, query: &str) -> Option<Ordering> {
    match value {
        FieldValue::Text(text) => Some(text.cmp(query)),
        FieldValue::TextList(_) => None,
        FieldValue::Year(year) => query.trim().parse::<i16>().ok().map(|q| year.cmp(&q)),
        FieldValue::Rating(rating) => query.parse::<Rating>().ok().map(|q| rating.cmp(&q)),
        FieldValue::Media(media) => query.parse::<MediaType>().ok().map(|q| media.cmp(&q)),
    }
}
