//! Error types for constraint building and activation

use thiserror::Error;

use crate::element::ElementId;
use crate::property::Attribute;
use crate::solver::InstallError;

/// Errors raised while compiling or activating a declarative block.
///
/// Every variant except [`Rejected`](ConstraintError::Rejected) is a
/// configuration error: a mistake in the caller's constraint description,
/// reported before anything reaches the external engine. All of them abort
/// the current block; nothing is retried and nothing is partially kept.
#[derive(Debug, Error)]
pub enum ConstraintError {
    /// Dimensions only relate to dimensions, positions to positions.
    #[error("cannot relate {first:?} to {second:?}: dimension and position attributes do not mix")]
    IncompatibleAttributes { first: Attribute, second: Attribute },

    /// Two composites in one relation must have the same member count.
    #[error("composite arity mismatch: {left} members vs {right}")]
    ArityMismatch { left: usize, right: usize },

    /// A composite can relate to another composite or to a scalar, never
    /// to a single expression.
    #[error("cannot relate a composite to a single expression")]
    CompositeVsSingle,

    /// The left-hand expression has a zero multiplier, so no property
    /// remains on that side after normalization.
    #[error("left-hand expression has a zero multiplier")]
    DegenerateExpression,

    /// Both sides of the relation are scalars.
    #[error("relation has no element property on either side")]
    MissingProperty,

    /// `inset` applies to edges composites only.
    #[error("inset requires an edges composite")]
    NotAnEdgesComposite,

    /// An element handle does not belong to this registry.
    #[error("unknown element {0}")]
    UnknownElement(ElementId),

    /// A constraint between two elements needs a common ancestor to be
    /// installed against.
    #[error("elements {first} and {second} share no common ancestor")]
    NoCommonAncestor { first: ElementId, second: ElementId },

    /// The external engine refused the constraint; surfaced unchanged.
    #[error("constraint rejected by the layout engine: {0}")]
    Rejected(#[from] InstallError),
}
