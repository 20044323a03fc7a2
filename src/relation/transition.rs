use crate::core::gender::Gender;
use crate::core::position::{AgeRef, Position};
use crate::relation::step::Step;

/// Advance `pos` by one step.
///
/// Total over every `(Position, Step)` pair. Columns follow two rules:
/// - a mother always sits on the other side from her children;
/// - children are grouped under their father's side, so a child of a woman is placed on
///   the opposite column from her.
pub fn apply_step(pos: &Position, step: Step) -> Position {
    match step {
        Step::Father => Position::new(pos.column, pos.row - 1, Gender::Male, AgeRef::Father, true),
        Step::Mother => Position::new(
            pos.column.flipped(),
            pos.row - 1,
            Gender::Female,
            AgeRef::Mother,
            true,
        ),
        Step::Husband => Position::new(
            pos.column.for_spouse(pos.gender, Gender::Male),
            pos.row,
            Gender::Male,
            AgeRef::Husband,
            pos.no_sibling_in_generation,
        ),
        Step::Wife => Position::new(
            pos.column.for_spouse(pos.gender, Gender::Female),
            pos.row,
            Gender::Female,
            AgeRef::Wife,
            pos.no_sibling_in_generation,
        ),
        Step::Son => child_of(pos, Gender::Male),
        Step::Daughter => child_of(pos, Gender::Female),
        Step::Sibling { gender, .. } => {
            Position::new(pos.column, pos.row, gender, pos.age_ref, false)
        }
    }
}

#[inline]
fn child_of(parent: &Position, gender: Gender) -> Position {
    Position::new(
        parent.column.for_head(parent.gender),
        parent.row + 1,
        gender,
        AgeRef::Self_,
        true,
    )
}
