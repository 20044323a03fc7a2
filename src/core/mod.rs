//! Grid primitives shared by every other module.
//!
//! Everything here is a small `Copy` value so traces can be rebuilt from scratch on every
//! edit of the step list:
//!
//! - [`gender`]: the gender of a person and the elder/younger qualifier of a sibling.
//! - [`column`]: the two intermarrying family sides.
//! - [`position`]: one person's cell on the grid plus the flags the term engine reads.

pub mod column;
pub mod gender;
pub mod position;
