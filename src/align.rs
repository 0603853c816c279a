//! Alignment convenience surface
//!
//! Thin callers of the core algebra: given several elements and one or
//! more attributes, pin every element's attribute to the first element's.
//! No new algebra lives here; each pair compiles through the same
//! relation path as a hand-written `a.top() == b.top()`.

use crate::constraint::Priority;
use crate::context::Context;
use crate::element::ElementId;
use crate::error::ConstraintError;
use crate::group::ConstraintGroup;
use crate::layout::Layout;
use crate::property::{Attribute, Property};
use crate::proxy::LayoutProxy;
use crate::relation::WeightedRelation::EQ;
use crate::solver::LayoutEngine;

/// Align elements on the given attributes, returning the activated group.
///
/// For every attribute, each element after the first gets one required
/// equality constraint of the form `other.attr == first.attr`, in element
/// order. Fewer than two elements produce an empty group.
pub fn align<E: LayoutEngine>(
    layout: &mut Layout<E>,
    attributes: &[Attribute],
    elements: &[ElementId],
) -> Result<ConstraintGroup, ConstraintError> {
    let mut cx = Context::new();
    align_into(&mut cx, attributes, elements)?;
    layout.activate_block(cx)
}

/// Align the proxies of an open declarative block on one attribute,
/// appending the equality constraints to the block's context.
pub fn align_in(
    cx: &mut Context,
    attribute: Attribute,
    proxies: &[LayoutProxy<'_>],
) -> Result<(), ConstraintError> {
    let Some((first, rest)) = proxies.split_first() else {
        return Ok(());
    };
    for other in rest {
        cx.add(
            other.property(attribute) | EQ(Priority::REQUIRED) | first.property(attribute),
        )?;
    }
    Ok(())
}

fn align_into(
    cx: &mut Context,
    attributes: &[Attribute],
    elements: &[ElementId],
) -> Result<(), ConstraintError> {
    let Some((&first, rest)) = elements.split_first() else {
        return Ok(());
    };
    for &attribute in attributes {
        for &other in rest {
            cx.add(
                Property::new(other, attribute)
                    | EQ(Priority::REQUIRED)
                    | Property::new(first, attribute),
            )?;
        }
    }
    Ok(())
}
