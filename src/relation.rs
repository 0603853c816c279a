//! Relation values and the compiler that normalizes them
//!
//! Relations are built with the pipe idiom:
//! `lhs | EQ(Priority::REQUIRED) | rhs`. Either side may be a property, an
//! expression, a composite or a scalar; [`Context::add`](crate::Context::add)
//! hands the finished [`Relation`] to [`Relation::compile`], which
//! validates it and produces one [`Constraint`] per member pair.
//!
//! Compilation normalizes `m1*p1 + c1  REL  m2*p2 + c2` into the canonical
//! direction `p1 REL' (m2/m1)*p2 + (c2 - c1)/m1`, flipping an inequality
//! when `m1` is negative. A zero `m1` leaves no property on the left-hand
//! side and is rejected.

use std::ops::BitOr;

use crate::constraint::{Constraint, Priority, RelationKind};
use crate::error::ConstraintError;
use crate::expression::{Composite, Expression};
use crate::property::Property;

/// A relation operator carrying its priority, e.g. `EQ(Priority::REQUIRED)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum WeightedRelation {
    EQ(Priority),
    GE(Priority),
    LE(Priority),
}

impl WeightedRelation {
    fn parts(self) -> (RelationKind, Priority) {
        match self {
            WeightedRelation::EQ(p) => (RelationKind::Equal, p),
            WeightedRelation::GE(p) => (RelationKind::GreaterOrEqual, p),
            WeightedRelation::LE(p) => (RelationKind::LessOrEqual, p),
        }
    }
}

/// One side of a relation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operand {
    Expr(Expression),
    Composite(Composite),
    Scalar(f64),
}

impl From<Property> for Operand {
    fn from(p: Property) -> Self {
        Operand::Expr(Expression::from(p))
    }
}

impl From<Expression> for Operand {
    fn from(e: Expression) -> Self {
        Operand::Expr(e)
    }
}

impl From<Composite> for Operand {
    fn from(c: Composite) -> Self {
        Operand::Composite(c)
    }
}

impl From<f64> for Operand {
    fn from(k: f64) -> Self {
        Operand::Scalar(k)
    }
}

/// A left-hand side joined with an operator, waiting for its right-hand
/// side: the intermediate state of `lhs | EQ(..) | rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialRelation {
    lhs: Operand,
    kind: RelationKind,
    priority: Priority,
}

/// A complete, not yet compiled relation between two sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    lhs: Operand,
    rhs: Operand,
    kind: RelationKind,
    priority: Priority,
}

macro_rules! impl_relation_pipes {
    ($($operand:ty),*) => {$(
        impl BitOr<WeightedRelation> for $operand {
            type Output = PartialRelation;

            fn bitor(self, relation: WeightedRelation) -> PartialRelation {
                let (kind, priority) = relation.parts();
                PartialRelation {
                    lhs: Operand::from(self),
                    kind,
                    priority,
                }
            }
        }

        impl BitOr<$operand> for PartialRelation {
            type Output = Relation;

            fn bitor(self, rhs: $operand) -> Relation {
                Relation {
                    lhs: self.lhs,
                    rhs: Operand::from(rhs),
                    kind: self.kind,
                    priority: self.priority,
                }
            }
        }
    )*};
}

impl_relation_pipes!(Property, Expression, Composite, f64);

impl Relation {
    /// Compile into solver-ready constraints, one per member pair.
    pub(crate) fn compile(self) -> Result<Vec<Constraint>, ConstraintError> {
        let priority = self.priority;
        let kind = self.kind;
        match (self.lhs, self.rhs) {
            (Operand::Expr(lhs), Operand::Expr(rhs)) => {
                Ok(vec![compile_pair(lhs, rhs, kind, priority)?])
            }
            (Operand::Expr(lhs), Operand::Scalar(k)) => {
                Ok(vec![compile_constant(lhs, k, kind, priority)?])
            }
            // k REL e  is  e REL' k with the relation mirrored
            (Operand::Scalar(k), Operand::Expr(rhs)) => {
                Ok(vec![compile_constant(rhs, k, kind.flipped(), priority)?])
            }
            (Operand::Composite(lhs), Operand::Composite(rhs)) => {
                if lhs.len() != rhs.len() {
                    return Err(ConstraintError::ArityMismatch {
                        left: lhs.len(),
                        right: rhs.len(),
                    });
                }
                lhs.members()
                    .iter()
                    .zip(rhs.members())
                    .map(|(&l, &r)| compile_pair(l, r, kind, priority))
                    .collect()
            }
            // a scalar broadcasts across every member
            (Operand::Composite(lhs), Operand::Scalar(k)) => lhs
                .members()
                .iter()
                .map(|&l| compile_constant(l, k, kind, priority))
                .collect(),
            (Operand::Scalar(k), Operand::Composite(rhs)) => rhs
                .members()
                .iter()
                .map(|&r| compile_constant(r, k, kind.flipped(), priority))
                .collect(),
            (Operand::Composite(_), Operand::Expr(_))
            | (Operand::Expr(_), Operand::Composite(_)) => Err(ConstraintError::CompositeVsSingle),
            (Operand::Scalar(_), Operand::Scalar(_)) => Err(ConstraintError::MissingProperty),
        }
    }
}

fn compile_pair(
    lhs: Expression,
    rhs: Expression,
    kind: RelationKind,
    priority: Priority,
) -> Result<Constraint, ConstraintError> {
    if lhs.property.kind() != rhs.property.kind() {
        return Err(ConstraintError::IncompatibleAttributes {
            first: lhs.property.attribute,
            second: rhs.property.attribute,
        });
    }
    if lhs.multiplier == 0.0 {
        return Err(ConstraintError::DegenerateExpression);
    }
    let relation = if lhs.multiplier < 0.0 {
        kind.flipped()
    } else {
        kind
    };
    Ok(Constraint {
        first: lhs.property,
        second: Some(rhs.property),
        relation,
        multiplier: rhs.multiplier / lhs.multiplier,
        constant: (rhs.constant - lhs.constant) / lhs.multiplier,
        priority,
    })
}

fn compile_constant(
    lhs: Expression,
    constant: f64,
    kind: RelationKind,
    priority: Priority,
) -> Result<Constraint, ConstraintError> {
    if lhs.multiplier == 0.0 {
        return Err(ConstraintError::DegenerateExpression);
    }
    let relation = if lhs.multiplier < 0.0 {
        kind.flipped()
    } else {
        kind
    };
    Ok(Constraint {
        first: lhs.property,
        second: None,
        relation,
        multiplier: 1.0,
        constant: (constant - lhs.constant) / lhs.multiplier,
        priority,
    })
}
