//! Resolve the South Indian kinship term for a person reached by a path of family-relation
//! steps (father, mother, husband, wife, son, daughter, sibling) from self.
//!
//! Every person is placed on a two-column grid: the column is one of two intermarrying
//! family sides and the row is the generation. The crate exposes three pure operations:
//!
//! - [`initial_position`]: where self stands.
//! - [`simulate`]: the trace of positions visited by a path.
//! - [`resolve_term`]: the kinship term for the end of a path.
//!
//! [`Walk`] bundles them for interactive callers that edit a path one step at a time.

pub mod core;
pub mod error;
pub mod logging;
pub mod relation;
pub mod trace;
pub mod walk;

pub use crate::core::column::Column;
pub use crate::core::gender::{Age, Gender};
pub use crate::core::position::{initial_position, AgeRef, Position};
pub use crate::error::ParseError;
pub use crate::relation::step::{parse_path, Step};
pub use crate::relation::terms::{resolve_term, Term};
pub use crate::relation::transition::apply_step;
pub use crate::trace::{simulate, Trace};
pub use crate::walk::{Resolution, Walk};
