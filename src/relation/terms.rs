//! Kinship term resolution.
//!
//! The grid cell of the final position decides the generation and side; the step history
//! decides between direct and collateral relatives, and between blood and marriage. Rules are
//! tried in a fixed order and the first match wins:
//!
//! 1. empty path: self
//! 2. row 2, column A: siblings (or people treated as siblings)
//! 3. row 1: parents, their siblings, and the effective-column correction for child steps
//! 4. row 2, column B: spouse, siblings-in-law, cousins-in-law
//! 5. row 3: children and children-in-law
//! 6. row 4: grandchildren
//! 7. row 0: grandparents
//! 8. row -1: great-grandparents
//! 9. anything else is [`Term::Uncovered`]

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::column::Column;
use crate::core::gender::{Age, Gender};
use crate::core::position::{AgeRef, Position};
use crate::relation::step::Step;

/// Text of [`Term::Uncovered`].
pub const UNCOVERED: &str = "relationship not covered";

/// A resolved kinship label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "term", rename_all = "snake_case")]
pub enum Term {
    #[serde(rename = "self")]
    Self_,
    /// Own brother or sister; the age is relative to self.
    Sibling { gender: Gender, age: Age },
    /// A same-side, same-generation relative addressed as a sibling (parallel cousins).
    SiblingByRelation { gender: Gender },
    Father,
    Mother,
    FathersBrother,
    FathersSister,
    MothersBrother,
    MothersSister,
    Husband,
    Wife,
    /// Brother or sister of a spouse-side anchor; the age is relative to `anchor`.
    SiblingInLaw { gender: Gender, age: Age, anchor: AgeRef },
    /// Same generation on the spouse side, not reached through a sibling step (cross cousins).
    CousinInLaw { gender: Gender },
    Son,
    Daughter,
    SonInLaw,
    DaughterInLaw,
    Grandchild { gender: Gender },
    Grandparent { gender: Gender },
    GreatGrandparent { gender: Gender },
    /// A cell the rule table does not address.
    Uncovered,
}

impl Term {
    #[inline]
    pub fn is_covered(&self) -> bool {
        *self != Term::Uncovered
    }

    /// The person an elder/younger qualifier in this term is measured against.
    pub fn anchor(&self) -> Option<AgeRef> {
        match *self {
            Term::Sibling { age, .. } if age != Age::Unknown => Some(AgeRef::Self_),
            Term::SiblingInLaw { age, anchor, .. } if age != Age::Unknown => Some(anchor),
            _ => None,
        }
    }
}

fn age_prefix(age: Age) -> &'static str {
    match age {
        Age::Elder => "elder ",
        Age::Younger => "younger ",
        Age::Unknown => "",
    }
}

fn by_gender(
    gender: Gender,
    male: &'static str,
    female: &'static str,
    any: &'static str,
) -> &'static str {
    match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Unknown => any,
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Term::Self_ => f.write_str("self (you)"),
            Term::Sibling { gender, age } => write!(
                f,
                "{}{}",
                age_prefix(age),
                by_gender(gender, "brother", "sister", "sibling")
            ),
            Term::SiblingByRelation { gender } => write!(
                f,
                "{} (by relation)",
                by_gender(gender, "brother", "sister", "sibling")
            ),
            Term::Father => f.write_str("father"),
            Term::Mother => f.write_str("mother"),
            Term::FathersBrother => f.write_str("father's brother"),
            Term::FathersSister => f.write_str("father's sister"),
            Term::MothersBrother => f.write_str("mother's brother"),
            Term::MothersSister => f.write_str("mother's sister"),
            Term::Husband => f.write_str("husband"),
            Term::Wife => f.write_str("wife"),
            Term::SiblingInLaw { gender, age, .. } => write!(
                f,
                "{}{}",
                age_prefix(age),
                by_gender(gender, "brother-in-law", "sister-in-law", "sibling-in-law")
            ),
            Term::CousinInLaw { gender } => f.write_str(by_gender(
                gender,
                "male cousin-in-law",
                "female cousin-in-law",
                "cousin-in-law",
            )),
            Term::Son => f.write_str("son"),
            Term::Daughter => f.write_str("daughter"),
            Term::SonInLaw => f.write_str("son-in-law"),
            Term::DaughterInLaw => f.write_str("daughter-in-law"),
            Term::Grandchild { gender } => {
                f.write_str(by_gender(gender, "grandson", "granddaughter", "grandchild"))
            }
            Term::Grandparent { gender } => f.write_str(by_gender(
                gender,
                "grandfather",
                "grandmother",
                "grandparent",
            )),
            Term::GreatGrandparent { gender } => f.write_str(by_gender(
                gender,
                "great-grandfather",
                "great-grandmother",
                "great-grandparent",
            )),
            Term::Uncovered => f.write_str(UNCOVERED),
        }
    }
}

/// Pick the kinship term for `pos`, the last entry of `trace`, reached by `steps` from a
/// self of `self_gender`.
///
/// Total: cells the rules do not address resolve to [`Term::Uncovered`].
pub fn resolve_term(
    pos: &Position,
    steps: &[Step],
    self_gender: Gender,
    trace: &[Position],
) -> Term {
    let (rule, term) = match_rule(pos, steps, trace);
    debug!(
        rule,
        %self_gender,
        steps = steps.len(),
        column = ?pos.column,
        row = pos.row,
        gender = %pos.gender,
        %term,
        "resolved kinship term"
    );
    term
}

fn match_rule(pos: &Position, steps: &[Step], trace: &[Position]) -> (&'static str, Term) {
    let Some(&last) = steps.last() else {
        return ("self", Term::Self_);
    };

    match (pos.row, pos.column) {
        (2, Column::A) => ("own_generation", own_generation(pos, last)),
        (1, _) => ("parents_generation", parents_generation(pos, steps, trace)),
        (2, Column::B) => ("spouse_generation", spouse_generation(pos, steps, last)),
        (3, _) => ("children_generation", children_generation(pos, last)),
        (4, _) => ("grandchildren", grandchildren(pos)),
        (0, _) => ("grandparents", Term::Grandparent { gender: pos.gender }),
        (-1, _) => ("great_grandparents", Term::GreatGrandparent { gender: pos.gender }),
        _ => ("uncovered", Term::Uncovered),
    }
}

fn own_generation(pos: &Position, last: Step) -> Term {
    match (pos.gender, last) {
        (Gender::Unknown, _) => Term::Uncovered,
        (_, Step::Sibling { gender, age }) => Term::Sibling { gender, age },
        (gender, _) => Term::SiblingByRelation { gender },
    }
}

/// Column a parents-generation person is reported under.
///
/// A child step lands the person on the side of the household it was born into; the
/// household's side is decided by the parent one entry back in the trace (a man heads his
/// own column, a woman's children are counted on the other one).
pub fn effective_column(pos: &Position, last: Option<Step>, trace: &[Position]) -> Column {
    match parent_entry(last, trace) {
        Some(parent) => parent.column.for_head(parent.gender),
        None => pos.column,
    }
}

fn parent_entry(last: Option<Step>, trace: &[Position]) -> Option<&Position> {
    if !last.is_some_and(Step::is_child) {
        return None;
    }
    trace.len().checked_sub(2).and_then(|i| trace.get(i))
}

/// Trace entry of the parent whose child step last changed generation, looking through any
/// spouse steps taken since.
fn lineage_parent<'a>(steps: &[Step], trace: &'a [Position]) -> Option<&'a Position> {
    let j = steps.iter().rposition(|s| !s.is_spouse())?;
    if !steps.get(j).is_some_and(|s| s.is_child()) {
        return None;
    }
    trace.get(j)
}

fn parents_generation(pos: &Position, steps: &[Step], trace: &[Position]) -> Term {
    // A child of a collateral grandparent-generation relative is collateral too, and so is
    // that child's spouse.
    let direct = pos.no_sibling_in_generation
        && lineage_parent(steps, trace).map_or(true, Position::is_direct);
    let column = effective_column(pos, steps.last().copied(), trace);

    match (pos.gender, direct, column) {
        (Gender::Male, true, _) => Term::Father,
        (Gender::Male, false, Column::A) => Term::FathersBrother,
        (Gender::Male, false, Column::B) => Term::MothersBrother,
        (Gender::Female, true, _) => Term::Mother,
        (Gender::Female, false, Column::A) => Term::FathersSister,
        (Gender::Female, false, Column::B) => Term::MothersSister,
        (Gender::Unknown, _, _) => Term::Uncovered,
    }
}

fn spouse_generation(pos: &Position, steps: &[Step], last: Step) -> Term {
    if pos.gender == Gender::Unknown {
        return Term::Uncovered;
    }
    match (steps, last) {
        ([Step::Husband], _) => Term::Husband,
        ([Step::Wife], _) => Term::Wife,
        (_, Step::Sibling { gender, age }) => Term::SiblingInLaw {
            gender,
            age,
            anchor: pos.age_ref,
        },
        _ => Term::CousinInLaw { gender: pos.gender },
    }
}

fn children_generation(pos: &Position, last: Step) -> Term {
    match (pos.gender, last) {
        (Gender::Male, Step::Son) => Term::Son,
        (Gender::Male, Step::Husband) => Term::SonInLaw,
        (Gender::Female, Step::Daughter) => Term::Daughter,
        (Gender::Female, Step::Wife) => Term::DaughterInLaw,
        (Gender::Unknown, _) => Term::Uncovered,
        (gender, _) => Term::Grandchild { gender },
    }
}

fn grandchildren(pos: &Position) -> Term {
    match pos.gender {
        Gender::Unknown => Term::Uncovered,
        gender => Term::Grandchild { gender },
    }
}
