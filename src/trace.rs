use tracing::trace;

use crate::core::gender::Gender;
use crate::core::position::{initial_position, Position};
use crate::relation::step::Step;
use crate::relation::transition::apply_step;

/// Every position visited by a path, self first.
pub type Trace = Vec<Position>;

/// Fold `steps` through [`apply_step`] starting from self.
///
/// The result always holds `steps.len() + 1` positions; an empty path yields just self.
pub fn simulate(self_gender: Gender, steps: &[Step]) -> Trace {
    let mut out: Trace = Vec::with_capacity(steps.len() + 1);
    let mut cur = initial_position(self_gender);
    out.push(cur);

    for (i, &step) in steps.iter().enumerate() {
        cur = apply_step(&cur, step);
        trace!(
            index = i + 1,
            %step,
            column = ?cur.column,
            row = cur.row,
            gender = %cur.gender,
            direct = cur.no_sibling_in_generation,
            "applied step"
        );
        out.push(cur);
    }
    out
}
