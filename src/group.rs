//! Owned groups of activated constraints

use crate::constraint::{Constraint, ConstraintId};
use crate::element::ElementId;

/// One installed constraint: the compiled description, the id it was
/// installed under and the element it was installed against.
#[derive(Debug, Clone)]
pub(crate) struct ActiveConstraint {
    pub(crate) id: ConstraintId,
    pub(crate) target: ElementId,
    pub(crate) constraint: Constraint,
}

/// The ordered set of constraints one declarative block activated.
///
/// A group exclusively owns its installed constraints; only
/// [`Layout::replace`](crate::Layout::replace) and
/// [`Layout::discard`](crate::Layout::discard) may deactivate them.
/// Dropping a group without discarding it leaves its constraints
/// installed on the engine with no owner left to remove them.
#[derive(Debug, Default)]
pub struct ConstraintGroup {
    pub(crate) active: Vec<ActiveConstraint>,
}

impl ConstraintGroup {
    pub(crate) fn new(active: Vec<ActiveConstraint>) -> Self {
        Self { active }
    }

    /// Number of currently active constraints held by this group.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The active constraints, in installation order.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.active.iter().map(|a| &a.constraint)
    }

    /// The element each constraint was installed against, in
    /// installation order.
    pub fn targets(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.active.iter().map(|a| a.target)
    }
}
