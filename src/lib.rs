//! Anchorage - a declarative builder for layout constraints
//!
//! This library turns arithmetic over element properties (edges,
//! dimensions, centers) into solver-ready linear constraints, and manages
//! the lifecycle of the constraint sets a declarative block produces:
//! grouping, atomic replacement, teardown. Solving is left to an external
//! engine behind the [`LayoutEngine`] trait; [`CassowarySolver`] is a
//! kasuari-backed engine for tests and in-process use.
//!
//! # Example
//!
//! ```rust
//! use anchorage::{CassowarySolver, Layout, Priority, EQ};
//!
//! let mut layout = Layout::new(CassowarySolver::new());
//! let window = layout.add_root();
//! let view = layout.add_child(window).unwrap();
//!
//! let group = layout
//!     .constrain([view, window], |cx, [view, window]| {
//!         cx.add(view.width() | EQ(Priority::REQUIRED) | 200.0)?;
//!         cx.add(view.top() | EQ(Priority::REQUIRED) | window.top() + 10.0)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(group.len(), 2);
//! ```
//!
//! Re-running a block for the same group goes through
//! [`Layout::replace`], which uninstalls the previous build and installs
//! the new one in a single synchronous step - after a replace, exactly
//! the new build is active, never the union of old and new.

pub mod align;
pub mod constraint;
pub mod context;
pub mod element;
pub mod error;
pub mod expression;
pub mod group;
pub mod layout;
pub mod property;
pub mod proxy;
pub mod relation;
pub mod solver;

pub use align::{align, align_in};
pub use constraint::{Constraint, ConstraintId, Priority, RelationKind};
pub use context::Context;
pub use element::{ElementId, Margins, Rect, ViewTree};
pub use error::ConstraintError;
pub use expression::{inset, inset_all, Composite, CompositeKind, Expression};
pub use group::ConstraintGroup;
pub use layout::Layout;
pub use property::{Attribute, AttributeKind, Property};
pub use proxy::LayoutProxy;
pub use relation::WeightedRelation::{EQ, GE, LE};
pub use relation::{PartialRelation, Relation, WeightedRelation};
pub use solver::{CassowarySolver, InstallError, LayoutEngine};
