use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::{normalize_token, ParseValueError};

/// Physical format of the copy someone owns, not the formats the title was released on.
///
/// Declared in order of introduction; the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MediaType {
    Vhs,
    LaserDisc,
    Dvd,
    Vcd,
    HdDvd,
    BluRay,
}

impl MediaType {
    pub const ALL: [MediaType; 6] = [
        MediaType::Vhs,
        MediaType::LaserDisc,
        MediaType::Dvd,
        MediaType::Vcd,
        MediaType::HdDvd,
        MediaType::BluRay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Vhs => "VHS",
            MediaType::LaserDisc => "LaserDisc",
            MediaType::Dvd => "DVD",
            MediaType::Vcd => "VCD",
            MediaType::HdDvd => "HD-DVD",
            MediaType::BluRay => "Blu-ray",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "VHS" => Ok(MediaType::Vhs),
            "LASERDISC" | "LAZERDISK" | "LASERDISK" => Ok(MediaType::LaserDisc),
            "DVD" => Ok(MediaType::Dvd),
            "VCD" => Ok(MediaType::Vcd),
            "HDDVD" => Ok(MediaType::HdDvd),
            "BLURAY" | "BD" => Ok(MediaType::BluRay),
            _ => Err(ParseValueError::new("media type", s)),
        }
    }
}

impl TryFrom<String> for MediaType {
    type Error = ParseValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
