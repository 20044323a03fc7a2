//! Errors raised at the text boundary.
//!
//! The engine itself is total; only turning user text into steps and genders can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty step token")]
    EmptyToken,

    #[error("unknown step `{input}` (expected father, mother, husband, wife, son, daughter, brother, sister or sibling)")]
    UnknownStep { input: String },

    #[error("`{prefix}` only qualifies brother, sister or sibling, not `{relation}`")]
    MisplacedAge { prefix: String, relation: String },

    #[error("unknown gender `{input}` (expected male, female or unknown)")]
    UnknownGender { input: String },
}
