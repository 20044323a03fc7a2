//! An editable path and its resolution.
//!
//! A [`Walk`] is what an interactive front end keeps between clicks: the asker's gender and
//! the ordered step list. Every call to [`Walk::resolve`] re-runs the simulator and the term
//! engine from scratch, so undo and reset need no bookkeeping.

use serde::Serialize;

use crate::core::gender::Gender;
use crate::core::position::Position;
use crate::relation::step::Step;
use crate::relation::terms::{resolve_term, Term};
use crate::trace::{simulate, Trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    self_gender: Gender,
    steps: Vec<Step>,
}

impl Walk {
    pub fn new(self_gender: Gender) -> Self {
        Self {
            self_gender,
            steps: Vec::new(),
        }
    }

    pub fn with_steps(self_gender: Gender, steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            self_gender,
            steps: steps.into_iter().collect(),
        }
    }

    #[inline]
    pub fn self_gender(&self) -> Gender {
        self.self_gender
    }

    pub fn set_self_gender(&mut self, gender: Gender) {
        self.self_gender = gender;
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Drop the most recent step.
    pub fn undo(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    pub fn reset(&mut self) {
        self.steps.clear();
    }

    pub fn resolve(&self) -> Resolution {
        let trace = simulate(self.self_gender, &self.steps);
        let term = match trace.last() {
            Some(last) => resolve_term(last, &self.steps, self.self_gender, &trace),
            None => Term::Uncovered,
        };
        Resolution { trace, term }
    }
}

/// Result of resolving a [`Walk`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub trace: Trace,
    pub term: Term,
}

impl Resolution {
    /// Final position of the path (self for an empty path).
    pub fn last(&self) -> Option<&Position> {
        self.trace.last()
    }
}
