use serde::{Deserialize, Serialize};

use crate::core::gender::Gender;

/// One of the two intermarrying family sides.
///
/// `A` is self's native side. Crossing a marriage (or taking a mother step) lands on `B`,
/// and crossing again returns to `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    A,
    B,
}

impl Column {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Column::A => Column::B,
            Column::B => Column::A,
        }
    }

    /// Column of the household headed through a person in `self` with `gender`.
    ///
    /// A man's household stays on his side; anyone else's is counted on the other side.
    #[inline]
    pub fn for_head(self, gender: Gender) -> Self {
        if gender.is_male() {
            self
        } else {
            self.flipped()
        }
    }

    /// Column the person of `spouse_gender` occupies when married to someone in `self`
    /// of `gender`.
    #[inline]
    pub fn for_spouse(self, gender: Gender, spouse_gender: Gender) -> Self {
        if gender == spouse_gender {
            self
        } else {
            self.flipped()
        }
    }
}
