//! Per-element property access handles
//!
//! A [`LayoutProxy`] is what a builder closure receives for each element
//! passed to [`Layout::constrain`](crate::Layout::constrain): a cheap,
//! copyable view over one element that hands out properties and property
//! composites.

use crate::element::{ElementId, ViewTree};
use crate::expression::{Composite, CompositeKind};
use crate::property::{Attribute, Property};

/// Property access for one element inside a declarative block.
#[derive(Clone, Copy)]
pub struct LayoutProxy<'t> {
    tree: &'t ViewTree,
    element: ElementId,
}

impl<'t> LayoutProxy<'t> {
    pub(crate) fn new(tree: &'t ViewTree, element: ElementId) -> Self {
        Self { tree, element }
    }

    /// The element this proxy stands for.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// A proxy for the element's parent, if it has one.
    pub fn superview(&self) -> Option<LayoutProxy<'t>> {
        self.tree
            .parent(self.element)
            .map(|parent| LayoutProxy::new(self.tree, parent))
    }

    /// The named attribute of this element.
    pub fn property(&self, attribute: Attribute) -> Property {
        Property::new(self.element, attribute)
    }

    /// The top edge of the element.
    pub fn top(&self) -> Property {
        self.property(Attribute::Top)
    }

    /// The bottom edge of the element.
    pub fn bottom(&self) -> Property {
        self.property(Attribute::Bottom)
    }

    /// The left edge of the element.
    pub fn left(&self) -> Property {
        self.property(Attribute::Left)
    }

    /// The right edge of the element.
    pub fn right(&self) -> Property {
        self.property(Attribute::Right)
    }

    /// The leading edge of the element.
    pub fn leading(&self) -> Property {
        self.property(Attribute::Leading)
    }

    /// The trailing edge of the element.
    pub fn trailing(&self) -> Property {
        self.property(Attribute::Trailing)
    }

    /// The width of the element.
    pub fn width(&self) -> Property {
        self.property(Attribute::Width)
    }

    /// The height of the element.
    pub fn height(&self) -> Property {
        self.property(Attribute::Height)
    }

    /// The horizontal center of the element.
    pub fn center_x(&self) -> Property {
        self.property(Attribute::CenterX)
    }

    /// The vertical center of the element.
    pub fn center_y(&self) -> Property {
        self.property(Attribute::CenterY)
    }

    /// The first baseline of the element.
    pub fn first_baseline(&self) -> Property {
        self.property(Attribute::FirstBaseline)
    }

    /// The last baseline of the element.
    pub fn last_baseline(&self) -> Property {
        self.property(Attribute::LastBaseline)
    }

    /// The top margin of the element.
    pub fn top_margin(&self) -> Property {
        self.property(Attribute::TopMargin)
    }

    /// The bottom margin of the element.
    pub fn bottom_margin(&self) -> Property {
        self.property(Attribute::BottomMargin)
    }

    /// The left margin of the element.
    pub fn left_margin(&self) -> Property {
        self.property(Attribute::LeftMargin)
    }

    /// The right margin of the element.
    pub fn right_margin(&self) -> Property {
        self.property(Attribute::RightMargin)
    }

    /// The leading margin of the element.
    pub fn leading_margin(&self) -> Property {
        self.property(Attribute::LeadingMargin)
    }

    /// The trailing margin of the element.
    pub fn trailing_margin(&self) -> Property {
        self.property(Attribute::TrailingMargin)
    }

    /// The horizontal center within the element's margins.
    pub fn center_x_within_margins(&self) -> Property {
        self.property(Attribute::CenterXWithinMargins)
    }

    /// The vertical center within the element's margins.
    pub fn center_y_within_margins(&self) -> Property {
        self.property(Attribute::CenterYWithinMargins)
    }

    /// All four edges: top, leading, bottom, trailing.
    pub fn edges(&self) -> Composite {
        Composite::from_properties(
            CompositeKind::Edges,
            vec![
                self.top(),
                self.leading(),
                self.bottom(),
                self.trailing(),
            ],
        )
    }

    /// All four edges with their margins applied: top margin, leading
    /// margin, bottom margin, trailing margin.
    pub fn edges_within_margins(&self) -> Composite {
        Composite::from_properties(
            CompositeKind::Edges,
            vec![
                self.top_margin(),
                self.leading_margin(),
                self.bottom_margin(),
                self.trailing_margin(),
            ],
        )
    }

    /// Width and height together.
    pub fn size(&self) -> Composite {
        Composite::from_properties(CompositeKind::Size, vec![self.width(), self.height()])
    }

    /// Horizontal and vertical center together.
    pub fn center(&self) -> Composite {
        Composite::from_properties(CompositeKind::Center, vec![self.center_x(), self.center_y()])
    }

    /// The center point within the element's margins.
    pub fn center_within_margins(&self) -> Composite {
        Composite::from_properties(
            CompositeKind::Center,
            vec![
                self.center_x_within_margins(),
                self.center_y_within_margins(),
            ],
        )
    }

    /// A composite over a caller-chosen set of attributes.
    ///
    /// # Panics
    ///
    /// Panics if `attributes` is empty.
    pub fn edges_of(&self, attributes: &[Attribute]) -> Composite {
        assert!(!attributes.is_empty(), "edges_of needs at least one attribute");
        Composite::from_properties(
            CompositeKind::Custom,
            attributes.iter().map(|&a| self.property(a)).collect(),
        )
    }
}
