//! Per-block accumulator of compiled constraints
//!
//! A [`Context`] lives for exactly one declarative block: the entry point
//! creates it, the builder closure receives it by `&mut` and feeds it
//! relations, and the entry point drains it once the closure returns.
//! Passing the context explicitly (instead of a process-wide "current
//! context" slot) means a relation can never be compiled outside a block,
//! and two blocks can never be open at once: the owning
//! [`Layout`](crate::Layout) is exclusively borrowed for the whole block.

use crate::constraint::Constraint;
use crate::error::ConstraintError;
use crate::relation::Relation;

/// Ordered collection of the constraints one declarative block produced.
#[derive(Default)]
pub struct Context {
    constraints: Vec<Constraint>,
}

impl Context {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Compile a relation and append the resulting constraints, in order.
    ///
    /// This is where every configuration error of a block surfaces:
    /// incompatible attribute kinds, composite arity mismatches and
    /// degenerate expressions are rejected here, before anything is
    /// handed to the external engine.
    pub fn add(&mut self, relation: Relation) -> Result<(), ConstraintError> {
        let compiled = relation.compile()?;
        self.constraints.extend(compiled);
        Ok(())
    }

    /// Number of constraints accumulated so far.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The constraints accumulated so far, in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Hand over the accumulated constraints, leaving the context empty.
    /// Called exactly once, at block exit.
    pub(crate) fn drain(&mut self) -> Vec<Constraint> {
        std::mem::take(&mut self.constraints)
    }
}
