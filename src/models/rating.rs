use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{normalize_token, ParseValueError};

/// MPAA rating of a movie.
///
/// Variants are declared from least to most restrictive, with `NR` last; the derived
/// `Ord` is the ordering used for sorting and for `<`/`>` filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Rating {
    G,
    PG,
    PG13,
    R,
    NC17,
    /// Not rated.
    NR,
}

impl Rating {
    pub const ALL: [Rating; 6] = [
        Rating::G,
        Rating::PG,
        Rating::PG13,
        Rating::R,
        Rating::NC17,
        Rating::NR,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::G => "G",
            Rating::PG => "PG",
            Rating::PG13 => "PG-13",
            Rating::R => "R",
            Rating::NC17 => "NC-17",
            Rating::NR => "NR",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "G" => Ok(Rating::G),
            "PG" => Ok(Rating::PG),
            "PG13" => Ok(Rating::PG13),
            "R" => Ok(Rating::R),
            "NC17" => Ok(Rating::NC17),
            "NR" | "NOTRATED" | "UNRATED" => Ok(Rating::NR),
            _ => Err(ParseValueError::new("rating", s)),
        }
    }
}

impl TryFrom<String> for Rating {
    type Error = ParseValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_legacy_spellings() {
        assert_eq!("PG-13".parse::<Rating>(), Ok(Rating::PG13));
        assert_eq!("PG_13".parse::<Rating>(), Ok(Rating::PG13));
        assert_eq!("nc-17".parse::<Rating>(), Ok(Rating::NC17));
        assert_eq!("Not Rated".parse::<Rating>(), Ok(Rating::NR));
        assert!("PG-15".parse::<Rating>().is_err());
        assert!("".parse::<Rating>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for rating in Rating::ALL {
            assert_eq!(rating.to_string().parse::<Rating>(), Ok(rating));
        }
    }

    #[test]
    fn ordering_follows_declaration() {
        assert!(Rating::G < Rating::PG);
        assert!(Rating::PG < Rating::PG13);
        assert!(Rating::PG13 < Rating::R);
        assert!(Rating::R < Rating::NC17);
        assert!(Rating::NC17 < Rating::NR);
    }
}
