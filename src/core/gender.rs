use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    #[inline]
    pub fn is_male(self) -> bool {
        self == Gender::Male
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "unknown" | "u" => Ok(Gender::Unknown),
            _ => Err(ParseError::UnknownGender {
                input: s.to_string(),
            }),
        }
    }
}

/// Age of a sibling relative to whoever the sibling step was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Age {
    Elder,
    Younger,
    Unknown,
}

impl Age {
    /// Token prefix used by the text form of a sibling step (`elder-brother`).
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Age::Elder => Some("elder"),
            Age::Younger => Some("younger"),
            Age::Unknown => None,
        }
    }
}
