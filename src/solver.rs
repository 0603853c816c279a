//! The external solver boundary
//!
//! The crate only ever makes two calls outward: install a constraint and
//! remove one, both idempotent. [`LayoutEngine`] captures that boundary;
//! [`CassowarySolver`] implements it on top of the kasuari Cassowary
//! solver, translating each compiled [`Constraint`] into the solver's
//! variable/expression format so tests and demos can observe solved
//! geometry. Nothing here feeds back into constraint building.

use std::collections::{HashMap, HashSet};

use kasuari::{
    AddConstraintError, Constraint as KasuariConstraint, Expression as KasuariExpression,
    Solver as KasuariSolver, Strength, Variable as KasuariVariable, WeightedRelation,
};
use thiserror::Error;

use crate::constraint::{Constraint, ConstraintId, Priority, RelationKind};
use crate::element::{ElementId, Margins, Rect};
use crate::property::{Attribute, Property};

/// Rejections the external engine may answer an installation with.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The constraint conflicts with constraints already installed.
    #[error("constraint cannot be satisfied together with those already installed")]
    Unsatisfiable,

    /// The engine considers the constraint a duplicate.
    #[error("constraint is already installed")]
    Duplicate,

    /// Anything else the engine reports.
    #[error("internal layout engine error: {0}")]
    Internal(String),
}

/// The two outward calls of the constraint lifecycle.
///
/// Both calls are idempotent with respect to the [`ConstraintId`]:
/// installing an id that is already present and removing one that is
/// absent are no-ops. The engine is never queried for geometry by this
/// crate.
pub trait LayoutEngine {
    /// Install a constraint under `id`, against `target` (the common
    /// ancestor of the related elements, per the engine's containment
    /// rules).
    fn install(
        &mut self,
        id: ConstraintId,
        target: ElementId,
        constraint: &Constraint,
    ) -> Result<(), InstallError>;

    /// Remove the constraint installed under `id`, if any.
    fn remove(&mut self, id: ConstraintId);
}

/// Base solver variables backing each element's derived attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum BaseVar {
    X,
    Y,
    Width,
    Height,
}

/// Kasuari-backed reference engine.
///
/// Every element gets four base variables (x, y, width, height); derived
/// attributes become expressions over them: `right = x + width`,
/// `center_x = x + width/2`, and so on. Leading and trailing resolve as
/// left and right, baselines as the top and bottom edges, and margin
/// attributes inset the edges by the element's [`Margins`].
pub struct CassowarySolver {
    solver: KasuariSolver,
    variables: HashMap<(ElementId, BaseVar), KasuariVariable>,
    installed: HashMap<ConstraintId, KasuariConstraint>,
    margins: HashMap<ElementId, Margins>,
    edited: HashSet<KasuariVariable>,
    values: HashMap<KasuariVariable, f64>,
}

impl CassowarySolver {
    pub fn new() -> Self {
        Self {
            solver: KasuariSolver::new(),
            variables: HashMap::new(),
            installed: HashMap::new(),
            margins: HashMap::new(),
            edited: HashSet::new(),
            values: HashMap::new(),
        }
    }

    /// Set the margins used to resolve the margin attribute variants of
    /// `element`. Unset elements have zero margins.
    pub fn set_margins(&mut self, element: ElementId, margins: Margins) {
        self.margins.insert(element, margins);
    }

    fn margins_of(&self, element: ElementId) -> Margins {
        self.margins.get(&element).copied().unwrap_or_default()
    }

    fn base_var(&mut self, element: ElementId, base: BaseVar) -> KasuariVariable {
        *self
            .variables
            .entry((element, base))
            .or_insert_with(KasuariVariable::new)
    }

    /// The kasuari expression for a property, in terms of the element's
    /// base variables.
    fn expression(&mut self, property: Property) -> KasuariExpression {
        let element = property.element;
        let margins = self.margins_of(element);
        match property.attribute {
            Attribute::Left | Attribute::Leading => self.base_var(element, BaseVar::X).into(),
            Attribute::Top | Attribute::FirstBaseline => {
                self.base_var(element, BaseVar::Y).into()
            }
            Attribute::Width => self.base_var(element, BaseVar::Width).into(),
            Attribute::Height => self.base_var(element, BaseVar::Height).into(),
            Attribute::Right | Attribute::Trailing => {
                let x = self.base_var(element, BaseVar::X);
                let width = self.base_var(element, BaseVar::Width);
                x + width
            }
            Attribute::Bottom | Attribute::LastBaseline => {
                let y = self.base_var(element, BaseVar::Y);
                let height = self.base_var(element, BaseVar::Height);
                y + height
            }
            Attribute::CenterX => {
                let x = self.base_var(element, BaseVar::X);
                let width = self.base_var(element, BaseVar::Width);
                x + width * 0.5
            }
            Attribute::CenterY => {
                let y = self.base_var(element, BaseVar::Y);
                let height = self.base_var(element, BaseVar::Height);
                y + height * 0.5
            }
            Attribute::LeftMargin | Attribute::LeadingMargin => {
                self.base_var(element, BaseVar::X) + margins.left
            }
            Attribute::TopMargin => self.base_var(element, BaseVar::Y) + margins.top,
            Attribute::RightMargin | Attribute::TrailingMargin => {
                let x = self.base_var(element, BaseVar::X);
                let width = self.base_var(element, BaseVar::Width);
                x + width - margins.right
            }
            Attribute::BottomMargin => {
                let y = self.base_var(element, BaseVar::Y);
                let height = self.base_var(element, BaseVar::Height);
                y + height - margins.bottom
            }
            Attribute::CenterXWithinMargins => {
                let x = self.base_var(element, BaseVar::X);
                let width = self.base_var(element, BaseVar::Width);
                x + width * 0.5 + (margins.left - margins.right) * 0.5
            }
            Attribute::CenterYWithinMargins => {
                let y = self.base_var(element, BaseVar::Y);
                let height = self.base_var(element, BaseVar::Height);
                y + height * 0.5 + (margins.top - margins.bottom) * 0.5
            }
        }
    }

    fn strength(priority: Priority) -> Strength {
        if priority >= Priority::REQUIRED {
            Strength::REQUIRED
        } else if priority >= Priority::HIGH {
            Strength::STRONG
        } else if priority >= Priority::MEDIUM {
            Strength::MEDIUM
        } else {
            Strength::WEAK
        }
    }

    /// Anchor an element's frame with editable (non-required) suggestions,
    /// the way a windowing harness would feed outer geometry in.
    pub fn suggest_frame(&mut self, element: ElementId, frame: Rect) -> Result<(), InstallError> {
        let suggestions = [
            (BaseVar::X, frame.x),
            (BaseVar::Y, frame.y),
            (BaseVar::Width, frame.width),
            (BaseVar::Height, frame.height),
        ];
        for (base, value) in suggestions {
            let var = self.base_var(element, base);
            if self.edited.insert(var) {
                self.solver
                    .add_edit_variable(var, Strength::STRONG)
                    .map_err(|e| {
                        InstallError::Internal(format!("failed to add edit variable: {}", e))
                    })?;
            }
            self.solver
                .suggest_value(var, value)
                .map_err(|e| InstallError::Internal(format!("failed to suggest value: {}", e)))?;
        }
        Ok(())
    }

    fn refresh(&mut self) {
        for (var, value) in self.solver.fetch_changes() {
            self.values.insert(*var, *value);
        }
    }

    fn value(&mut self, element: ElementId, base: BaseVar) -> f64 {
        let var = self.base_var(element, base);
        self.values.get(&var).copied().unwrap_or(0.0)
    }

    /// The solved frame of an element. Variables the solver never
    /// constrained read as zero.
    pub fn frame(&mut self, element: ElementId) -> Rect {
        self.refresh();
        Rect::new(
            self.value(element, BaseVar::X),
            self.value(element, BaseVar::Y),
            self.value(element, BaseVar::Width),
            self.value(element, BaseVar::Height),
        )
    }

    /// Number of constraints currently installed in the solver.
    pub fn installed_len(&self) -> usize {
        self.installed.len()
    }
}

impl Default for CassowarySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for CassowarySolver {
    fn install(
        &mut self,
        id: ConstraintId,
        _target: ElementId,
        constraint: &Constraint,
    ) -> Result<(), InstallError> {
        if self.installed.contains_key(&id) {
            return Ok(());
        }
        let lhs = self.expression(constraint.first);
        let relation = match constraint.relation {
            RelationKind::Equal => WeightedRelation::EQ(Self::strength(constraint.priority)),
            RelationKind::GreaterOrEqual => {
                WeightedRelation::GE(Self::strength(constraint.priority))
            }
            RelationKind::LessOrEqual => WeightedRelation::LE(Self::strength(constraint.priority)),
        };
        let compiled = match constraint.second {
            Some(second) => {
                let rhs = self.expression(second) * constraint.multiplier + constraint.constant;
                lhs | relation | rhs
            }
            None => lhs | relation | constraint.constant,
        };
        self.solver
            .add_constraint(compiled.clone())
            .map_err(|e| match e {
                AddConstraintError::UnsatisfiableConstraint => InstallError::Unsatisfiable,
                AddConstraintError::DuplicateConstraint => InstallError::Duplicate,
                AddConstraintError::InternalSolverError(msg) => {
                    InstallError::Internal(msg.to_string())
                }
            })?;
        self.installed.insert(id, compiled);
        Ok(())
    }

    fn remove(&mut self, id: ConstraintId) {
        // removing an id that was never installed is a no-op
        if let Some(compiled) = self.installed.remove(&id) {
            let _ = self.solver.remove_constraint(&compiled);
        }
    }
}
