//! Properties: handles to one measurable attribute of one element

use crate::element::ElementId;

/// Attributes of an element that can be constrained.
///
/// The margin and within-margins variants mirror the platform-specific
/// attribute set; engines that have no margin concept resolve them as the
/// plain edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Top,
    Bottom,
    Left,
    Right,
    Leading,
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
    FirstBaseline,
    LastBaseline,
    TopMargin,
    BottomMargin,
    LeftMargin,
    RightMargin,
    LeadingMargin,
    TrailingMargin,
    CenterXWithinMargins,
    CenterYWithinMargins,
}

/// Category of an attribute, used to reject relations the external solver
/// could never accept (a dimension related to a position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Width or height
    Dimension,
    /// Edges, centers, baselines and their margin variants
    Position,
}

impl Attribute {
    pub fn kind(self) -> AttributeKind {
        match self {
            Attribute::Width | Attribute::Height => AttributeKind::Dimension,
            _ => AttributeKind::Position,
        }
    }
}

/// A handle to one attribute of one element.
///
/// Holds only the element's opaque id; looking the element up again goes
/// through the [`ViewTree`](crate::ViewTree) registry, so a property never
/// extends an element's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
    pub element: ElementId,
    pub attribute: Attribute,
}

impl Property {
    pub fn new(element: ElementId, attribute: Attribute) -> Self {
        Self { element, attribute }
    }

    pub fn kind(self) -> AttributeKind {
        self.attribute.kind()
    }
}
