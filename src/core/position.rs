use serde::{Deserialize, Serialize};

use crate::core::column::Column;
use crate::core::gender::Gender;

/// Generation row of self. Ancestors sit on smaller rows, descendants on larger ones.
pub const SELF_ROW: i32 = 2;

/// The relation an elder/younger qualifier is measured against.
///
/// A sibling inherits the anchor of the person it was taken from: the younger brother of
/// one's wife is younger than the wife, not than self.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeRef {
    #[serde(rename = "self")]
    Self_,
    Father,
    Mother,
    Husband,
    Wife,
}

impl AgeRef {
    pub fn as_str(self) -> &'static str {
        match self {
            AgeRef::Self_ => "self",
            AgeRef::Father => "father",
            AgeRef::Mother => "mother",
            AgeRef::Husband => "husband",
            AgeRef::Wife => "wife",
        }
    }
}

/// One person's cell on the two-column genealogical grid.
///
/// Positions are never mutated: every step produces a fresh value that is appended to the
/// trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: Column,
    pub row: i32,
    pub gender: Gender,
    pub age_ref: AgeRef,
    /// True when this person is the literal ancestor/spouse/child reached by direct steps,
    /// false once a sibling step branched off within the current generation.
    pub no_sibling_in_generation: bool,
}

impl Position {
    #[inline]
    pub const fn new(
        column: Column,
        row: i32,
        gender: Gender,
        age_ref: AgeRef,
        no_sibling_in_generation: bool,
    ) -> Self {
        Self {
            column,
            row,
            gender,
            age_ref,
            no_sibling_in_generation,
        }
    }

    /// `(column, row)` without the metadata.
    #[inline]
    pub fn cell(&self) -> (Column, i32) {
        (self.column, self.row)
    }

    #[inline]
    pub fn is_direct(&self) -> bool {
        self.no_sibling_in_generation
    }
}

/// The asker: column A, row 2, anchored to itself.
pub fn initial_position(self_gender: Gender) -> Position {
    Position::new(Column::A, SELF_ROW, self_gender, AgeRef::Self_, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_starts_on_column_a_row_two() {
        let p = initial_position(Gender::Female);
        assert_eq!(p.cell(), (Column::A, 2));
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.age_ref, AgeRef::Self_);
        assert!(!p.no_sibling_in_generation);
    }
}
