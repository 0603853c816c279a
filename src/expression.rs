//! Linear expressions over properties
//!
//! An [`Expression`] is `multiplier * property + constant`. Arithmetic on
//! properties and expressions composes the two scalars:
//! `(m*p + c) * k == (m*k)*p + c*k` and `(m*p + c) + k == m*p + (c + k)`.
//! A [`Composite`] bundles the expressions of a property group (all four
//! edges, a size, a center point) and distributes every scalar operation
//! over its members.

use std::ops::{Add, Div, Mul, Sub};

use crate::error::ConstraintError;
use crate::property::Property;

/// A linear transform of a single property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub property: Property,
    pub multiplier: f64,
    pub constant: f64,
}

impl Expression {
    pub fn new(property: Property, multiplier: f64, constant: f64) -> Self {
        Self {
            property,
            multiplier,
            constant,
        }
    }
}

impl From<Property> for Expression {
    fn from(property: Property) -> Self {
        Expression::new(property, 1.0, 0.0)
    }
}

/// Which property group a composite expression came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    /// Top, leading, bottom and trailing edges, in that order
    Edges,
    /// Width and height
    Size,
    /// Horizontal and vertical center
    Center,
    /// A caller-chosen attribute list
    Custom,
}

/// An ordered group of expressions, one per member of a property group.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    kind: CompositeKind,
    members: Vec<Expression>,
}

impl Composite {
    pub(crate) fn new(kind: CompositeKind, members: Vec<Expression>) -> Self {
        Self { kind, members }
    }

    pub(crate) fn from_properties(kind: CompositeKind, properties: Vec<Property>) -> Self {
        Self::new(kind, properties.into_iter().map(Expression::from).collect())
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    pub fn members(&self) -> &[Expression] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn map(self, f: impl Fn(Expression) -> Expression) -> Self {
        Self {
            kind: self.kind,
            members: self.members.into_iter().map(f).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scalar arithmetic
// ---------------------------------------------------------------------------

impl Add<f64> for Expression {
    type Output = Expression;

    fn add(self, constant: f64) -> Expression {
        Expression::new(self.property, self.multiplier, self.constant + constant)
    }
}

impl Sub<f64> for Expression {
    type Output = Expression;

    fn sub(self, constant: f64) -> Expression {
        Expression::new(self.property, self.multiplier, self.constant - constant)
    }
}

impl Mul<f64> for Expression {
    type Output = Expression;

    fn mul(self, factor: f64) -> Expression {
        Expression::new(
            self.property,
            self.multiplier * factor,
            self.constant * factor,
        )
    }
}

impl Mul<Expression> for f64 {
    type Output = Expression;

    fn mul(self, expression: Expression) -> Expression {
        expression * self
    }
}

impl Div<f64> for Expression {
    type Output = Expression;

    /// # Panics
    ///
    /// Panics if `divisor` is zero; there is no meaningful constraint a
    /// division by zero could describe.
    fn div(self, divisor: f64) -> Expression {
        assert!(divisor != 0.0, "layout expression divided by zero");
        self * (1.0 / divisor)
    }
}

impl Add<f64> for Property {
    type Output = Expression;

    fn add(self, constant: f64) -> Expression {
        Expression::from(self) + constant
    }
}

impl Sub<f64> for Property {
    type Output = Expression;

    fn sub(self, constant: f64) -> Expression {
        Expression::from(self) - constant
    }
}

impl Mul<f64> for Property {
    type Output = Expression;

    fn mul(self, factor: f64) -> Expression {
        Expression::from(self) * factor
    }
}

impl Mul<Property> for f64 {
    type Output = Expression;

    fn mul(self, property: Property) -> Expression {
        Expression::from(property) * self
    }
}

impl Div<f64> for Property {
    type Output = Expression;

    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn div(self, divisor: f64) -> Expression {
        Expression::from(self) / divisor
    }
}

impl Add<f64> for Composite {
    type Output = Composite;

    fn add(self, constant: f64) -> Composite {
        self.map(|e| e + constant)
    }
}

impl Sub<f64> for Composite {
    type Output = Composite;

    fn sub(self, constant: f64) -> Composite {
        self.map(|e| e - constant)
    }
}

impl Mul<f64> for Composite {
    type Output = Composite;

    fn mul(self, factor: f64) -> Composite {
        self.map(|e| e * factor)
    }
}

impl Mul<Composite> for f64 {
    type Output = Composite;

    fn mul(self, composite: Composite) -> Composite {
        composite * self
    }
}

impl Div<f64> for Composite {
    type Output = Composite;

    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn div(self, divisor: f64) -> Composite {
        self.map(|e| e / divisor)
    }
}

// ---------------------------------------------------------------------------
// Edge insets
// ---------------------------------------------------------------------------

/// Inset an edges composite by `horizontal` on leading/trailing and
/// `vertical` on top/bottom.
///
/// Unlike plain scalar addition, which shifts all edges the same way, an
/// inset moves opposing edges towards each other.
pub fn inset(
    edges: Composite,
    horizontal: f64,
    vertical: f64,
) -> Result<Composite, ConstraintError> {
    if edges.kind != CompositeKind::Edges || edges.members.len() != 4 {
        return Err(ConstraintError::NotAnEdgesComposite);
    }
    // member order: top, leading, bottom, trailing
    let mut members = edges.members;
    members[0] = members[0] + vertical;
    members[1] = members[1] + horizontal;
    members[2] = members[2] - vertical;
    members[3] = members[3] - horizontal;
    Ok(Composite::new(CompositeKind::Edges, members))
}

/// Inset an edges composite by the same amount on all four sides.
pub fn inset_all(edges: Composite, value: f64) -> Result<Composite, ConstraintError> {
    inset(edges, value, value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::element::ViewTree;
    use crate::property::Attribute;

    fn width_property() -> Property {
        let mut tree = ViewTree::new();
        let root = tree.add_root();
        Property::new(root, Attribute::Width)
    }

    #[test]
    fn test_property_times_scalar_plus_constant() {
        let p = width_property();
        let e = p * 3.0 + 12.5;
        assert_eq!(e.property, p);
        assert_eq!(e.multiplier, 3.0);
        assert_eq!(e.constant, 12.5);
    }

    #[test]
    fn test_scalar_on_the_left() {
        let p = width_property();
        assert_eq!(2.0 * p, p * 2.0);
        assert_eq!(2.0 * (p + 1.0), (p + 1.0) * 2.0);
    }

    #[test]
    fn test_addition_associates_over_scalars() {
        let e = Expression::from(width_property());
        assert_eq!((e + 3.0) + 4.0, e + 7.0);
        assert_eq!((e - 3.0) + 4.0, e + 1.0);
    }

    #[test]
    fn test_multiplication_associates_over_scalars() {
        let e = Expression::from(width_property());
        assert_eq!((e * 3.0) * 4.0, e * 12.0);
    }

    #[test]
    fn test_multiplication_distributes_over_constant() {
        let p = width_property();
        // (m*p + c) * k == (m*k)*p + c*k
        let e = (p * 2.0 + 5.0) * 3.0;
        assert_eq!(e.multiplier, 6.0);
        assert_eq!(e.constant, 15.0);
    }

    #[test]
    fn test_division_is_reciprocal_multiplication() {
        let p = width_property();
        let e = p / 4.0;
        assert_eq!(e.multiplier, 0.25);
        assert_eq!(e.constant, 0.0);
    }

    #[test]
    #[should_panic(expected = "divided by zero")]
    fn test_division_by_zero_panics() {
        let _ = width_property() / 0.0;
    }

    #[test]
    fn test_composite_arithmetic_is_member_wise() {
        let mut tree = ViewTree::new();
        let root = tree.add_root();
        let composite = Composite::from_properties(
            CompositeKind::Size,
            vec![
                Property::new(root, Attribute::Width),
                Property::new(root, Attribute::Height),
            ],
        );
        let scaled = composite * 2.0 + 10.0;
        assert_eq!(scaled.len(), 2);
        for member in scaled.members() {
            assert_eq!(member.multiplier, 2.0);
            assert_eq!(member.constant, 10.0);
        }
    }

    #[test]
    fn test_inset_moves_opposing_edges_towards_each_other() {
        let mut tree = ViewTree::new();
        let root = tree.add_root();
        let edges = Composite::from_properties(
            CompositeKind::Edges,
            vec![
                Property::new(root, Attribute::Top),
                Property::new(root, Attribute::Leading),
                Property::new(root, Attribute::Bottom),
                Property::new(root, Attribute::Trailing),
            ],
        );
        let inset_edges = inset(edges, 10.0, 20.0).unwrap();
        let constants: Vec<f64> = inset_edges.members().iter().map(|e| e.constant).collect();
        assert_eq!(constants, vec![20.0, 10.0, -20.0, -10.0]);
    }

    #[test]
    fn test_inset_rejects_non_edges_composites() {
        let mut tree = ViewTree::new();
        let root = tree.add_root();
        let size = Composite::from_properties(
            CompositeKind::Size,
            vec![
                Property::new(root, Attribute::Width),
                Property::new(root, Attribute::Height),
            ],
        );
        assert!(matches!(
            inset_all(size, 5.0),
            Err(ConstraintError::NotAnEdgesComposite)
        ));
    }
}
