use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::gender::{Age, Gender};
use crate::error::ParseError;

/// One elementary move along a family path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    Father,
    Mother,
    Husband,
    Wife,
    Son,
    Daughter,
    Sibling { gender: Gender, age: Age },
}

impl Step {
    #[inline]
    pub const fn sibling(gender: Gender, age: Age) -> Self {
        Step::Sibling { gender, age }
    }

    #[inline]
    pub fn is_child(self) -> bool {
        matches!(self, Step::Son | Step::Daughter)
    }

    #[inline]
    pub fn is_spouse(self) -> bool {
        matches!(self, Step::Husband | Step::Wife)
    }

    fn relation_word(self) -> &'static str {
        match self {
            Step::Father => "father",
            Step::Mother => "mother",
            Step::Husband => "husband",
            Step::Wife => "wife",
            Step::Son => "son",
            Step::Daughter => "daughter",
            Step::Sibling { gender, .. } => match gender {
                Gender::Male => "brother",
                Gender::Female => "sister",
                Gender::Unknown => "sibling",
            },
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Step::Sibling { age, .. } = self {
            if let Some(prefix) = age.prefix() {
                return write!(f, "{prefix}-{}", self.relation_word());
            }
        }
        f.write_str(self.relation_word())
    }
}

fn split_age_prefix(token: &str) -> (Age, &str) {
    for (age, prefix) in [(Age::Elder, "elder"), (Age::Younger, "younger")] {
        if let Some(rest) = token.strip_prefix(prefix) {
            if let Some(rest) = rest.strip_prefix(['-', '_']) {
                return (age, rest);
            }
        }
    }
    (Age::Unknown, token)
}

impl FromStr for Step {
    type Err = ParseError;

    /// Parses `father`, `mother`, `husband`, `wife`, `son`, `daughter`, `brother`, `sister`
    /// or `sibling`; the last three accept an `elder-` / `younger-` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        if token.is_empty() {
            return Err(ParseError::EmptyToken);
        }

        let (age, relation) = split_age_prefix(&token);
        let plain = match relation {
            "father" => Some(Step::Father),
            "mother" => Some(Step::Mother),
            "husband" => Some(Step::Husband),
            "wife" => Some(Step::Wife),
            "son" => Some(Step::Son),
            "daughter" => Some(Step::Daughter),
            _ => None,
        };

        if let Some(step) = plain {
            return match age.prefix() {
                None => Ok(step),
                Some(prefix) => Err(ParseError::MisplacedAge {
                    prefix: prefix.to_string(),
                    relation: relation.to_string(),
                }),
            };
        }

        let gender = match relation {
            "brother" => Gender::Male,
            "sister" => Gender::Female,
            "sibling" => Gender::Unknown,
            _ => {
                return Err(ParseError::UnknownStep {
                    input: s.trim().to_string(),
                })
            }
        };
        Ok(Step::sibling(gender, age))
    }
}

/// Parses a whole path such as `"mother, elder-sister daughter"`.
///
/// Tokens are separated by commas and/or whitespace. A blank string is the empty path.
pub fn parse_path(text: &str) -> Result<Vec<Step>, ParseError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_tokens_carry_gender_and_age() {
        assert_eq!(
            "Younger_Brother".parse::<Step>().unwrap(),
            Step::sibling(Gender::Male, Age::Younger)
        );
        assert_eq!(
            "sibling".parse::<Step>().unwrap(),
            Step::sibling(Gender::Unknown, Age::Unknown)
        );
    }

    #[test]
    fn age_prefix_on_a_lineage_step_is_rejected() {
        let err = "elder-father".parse::<Step>().unwrap_err();
        assert!(matches!(err, ParseError::MisplacedAge { .. }));
    }

    #[test]
    fn display_uses_the_canonical_token() {
        assert_eq!(Step::sibling(Gender::Female, Age::Elder).to_string(), "elder-sister");
        assert_eq!(Step::Daughter.to_string(), "daughter");
    }
}
