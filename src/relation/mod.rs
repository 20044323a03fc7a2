//! Relation steps and the rules that act on them.

pub mod step;
pub mod terms;
pub mod transition;
