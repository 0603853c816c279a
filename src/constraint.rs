//! Compiled constraints, ready for an external layout engine

use std::fmt;

use crate::element::ElementId;
use crate::property::Property;

/// The relation a constraint asserts between its two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl RelationKind {
    /// The relation that holds when both sides are swapped, or when an
    /// inequality is divided by a negative multiplier.
    pub fn flipped(self) -> Self {
        match self {
            RelationKind::Equal => RelationKind::Equal,
            RelationKind::GreaterOrEqual => RelationKind::LessOrEqual,
            RelationKind::LessOrEqual => RelationKind::GreaterOrEqual,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            RelationKind::Equal => "==",
            RelationKind::GreaterOrEqual => ">=",
            RelationKind::LessOrEqual => "<=",
        };
        f.write_str(symbol)
    }
}

/// Weight of a constraint relative to others; the external engine breaks
/// ties in favour of higher priorities. [`Priority::REQUIRED`] constraints
/// must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u16);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000);
    pub const HIGH: Priority = Priority(750);
    pub const MEDIUM: Priority = Priority(500);
    pub const LOW: Priority = Priority(250);
}

impl Default for Priority {
    fn default() -> Self {
        Priority::REQUIRED
    }
}

/// Identity of an installed constraint, issued at activation time.
///
/// The id is what makes install/remove idempotent at the engine boundary:
/// installing an id twice is a no-op, as is removing one that is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(u64);

impl ConstraintId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A compiled, solver-ready constraint.
///
/// Canonical direction: the constraint reads
/// `first REL multiplier * second + constant`. When `second` is `None` the
/// constraint pins `first` against the bare `constant`
/// (e.g. `width == 200`), and `multiplier` is 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub first: Property,
    pub second: Option<Property>,
    pub relation: RelationKind,
    pub multiplier: f64,
    pub constant: f64,
    pub priority: Priority,
}

impl Constraint {
    /// Whether this is a constant-only constraint (`second` is absent).
    pub fn is_constant(&self) -> bool {
        self.second.is_none()
    }

    /// The elements this constraint references.
    pub fn elements(&self) -> (ElementId, Option<ElementId>) {
        (self.first.element, self.second.map(|p| p.element))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:?} {} ",
            self.first.element, self.first.attribute, self.relation
        )?;
        match self.second {
            Some(second) => {
                if self.multiplier != 1.0 {
                    write!(f, "{} * ", self.multiplier)?;
                }
                write!(f, "{}.{:?}", second.element, second.attribute)?;
                if self.constant != 0.0 {
                    write!(f, " + {}", self.constant)?;
                }
            }
            None => write!(f, "{}", self.constant)?,
        }
        if self.priority != Priority::REQUIRED {
            write!(f, " @ {}", self.priority.0)?;
        }
        Ok(())
    }
}
