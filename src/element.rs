//! Element registry and geometry value types
//!
//! Elements are rectangular layout participants. The registry hands out
//! opaque [`ElementId`] handles; everything else in the crate refers to
//! elements through those handles rather than owning them, so a compiled
//! constraint never keeps an element alive.

use std::fmt;

use crate::error::ConstraintError;

/// Opaque handle to an element registered in a [`ViewTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u32);

impl ElementId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangle in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized rectangle at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Per-element margins, used to resolve the margin attribute variants.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Margins {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same margin on all four sides
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

struct Node {
    parent: Option<ElementId>,
    translates_frame: bool,
}

/// Registry of elements and their parent/child relationships.
///
/// The tree is the source of truth for two things the activation protocol
/// needs: the minimal common ancestor a constraint is installed against,
/// and each element's automatic frame-to-constraint translation flag. The
/// flag starts `true` and is flipped to `false` the first time any
/// activated constraint references the element; it is never re-enabled.
#[derive(Default)]
pub struct ViewTree {
    nodes: Vec<Node>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element with no parent
    pub fn add_root(&mut self) -> ElementId {
        self.insert(None)
    }

    /// Register an element as a child of `parent`
    pub fn add_child(&mut self, parent: ElementId) -> Result<ElementId, ConstraintError> {
        if !self.contains(parent) {
            return Err(ConstraintError::UnknownElement(parent));
        }
        Ok(self.insert(Some(parent)))
    }

    fn insert(&mut self, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent,
            translates_frame: true,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Whether the element still translates its frame into constraints.
    /// Unregistered elements report `true`, the initial state.
    pub fn translates_frame_to_constraints(&self, id: ElementId) -> bool {
        self.nodes.get(id.index()).map_or(true, |n| n.translates_frame)
    }

    pub(crate) fn disable_frame_translation(&mut self, id: ElementId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.translates_frame = false;
        }
    }

    /// The closest element that is an ancestor of both `a` and `b`, where
    /// an element counts as its own ancestor. `None` if the elements live
    /// in disjoint trees or either handle is unknown.
    pub fn common_ancestor(&self, a: ElementId, b: ElementId) -> Option<ElementId> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let chain = self.ancestor_chain(a);
        let mut current = Some(b);
        while let Some(id) = current {
            if chain.contains(&id) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    fn ancestor_chain(&self, id: ElementId) -> Vec<ElementId> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            chain.push(id);
            current = self.parent(id);
        }
        chain
    }
}
