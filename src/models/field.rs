use std::fmt;
use std::str::FromStr;

use super::{normalize_token, ParseValueError};

/// An attribute of a [`Movie`](super::Movie) that can be sorted or filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Actors,
    Year,
    Rating,
    Media,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Description,
        Field::Actors,
        Field::Year,
        Field::Rating,
        Field::Media,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Actors => "actors",
            Field::Year => "year",
            Field::Rating => "rating",
            Field::Media => "media",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "TITLE" => Ok(Field::Title),
            "DESCRIPTION" => Ok(Field::Description),
            "ACTORS" | "ACTOR" | "CAST" => Ok(Field::Actors),
            "YEAR" => Ok(Field::Year),
            "RATING" => Ok(Field::Rating),
            "MEDIA" | "MEDIATYPE" => Ok(Field::Media),
            _ => Err(ParseValueError::new("field", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_case_insensitive() {
        assert_eq!("TITLE".parse::<Field>(), Ok(Field::Title));
        assert_eq!("year".parse::<Field>(), Ok(Field::Year));
        assert_eq!("Media_Type".parse::<Field>(), Ok(Field::Media));
        assert!("runtime".parse::<Field>().is_err());
    }
}
