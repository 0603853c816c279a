//! Declarative block entry points and the activation protocol
//!
//! [`Layout`] owns the element registry and the external engine, and runs
//! declarative blocks: [`Layout::constrain`] opens a fresh [`Context`],
//! hands it to the builder closure together with one [`LayoutProxy`] per
//! element, and activates whatever the block produced. Because every
//! operation takes `&mut self`, a second block cannot open while one is
//! running; the single-active-block discipline is enforced by the borrow
//! checker instead of a process-wide "current context" slot.

use crate::constraint::{Constraint, ConstraintId};
use crate::context::Context;
use crate::element::{ElementId, ViewTree};
use crate::error::ConstraintError;
use crate::group::{ActiveConstraint, ConstraintGroup};
use crate::proxy::LayoutProxy;
use crate::solver::LayoutEngine;

/// The owner of a view tree and a layout engine, and the only place
/// constraints get activated or deactivated.
pub struct Layout<E: LayoutEngine> {
    tree: ViewTree,
    engine: E,
    next_id: u64,
}

impl<E: LayoutEngine> Layout<E> {
    pub fn new(engine: E) -> Self {
        Self {
            tree: ViewTree::new(),
            engine,
            next_id: 0,
        }
    }

    /// Register an element with no parent.
    pub fn add_root(&mut self) -> ElementId {
        self.tree.add_root()
    }

    /// Register an element as a child of `parent`.
    pub fn add_child(&mut self, parent: ElementId) -> Result<ElementId, ConstraintError> {
        self.tree.add_child(parent)
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Run a declarative block over `elements` and activate the
    /// constraints it builds.
    ///
    /// The closure receives the block's [`Context`] and one proxy per
    /// element, in the same order. On success every compiled constraint
    /// is installed (against the common ancestor of the elements it
    /// relates) and the automatic frame-to-constraint translation of
    /// every referenced element is disabled. On error nothing from this
    /// block stays installed.
    pub fn constrain<const N: usize, F>(
        &mut self,
        elements: [ElementId; N],
        build: F,
    ) -> Result<ConstraintGroup, ConstraintError>
    where
        F: FnOnce(&mut Context, [LayoutProxy<'_>; N]) -> Result<(), ConstraintError>,
    {
        let constraints = self.run_block(elements, build)?;
        let planned = self.plan(constraints)?;
        let active = self.install_planned(planned)?;
        Ok(ConstraintGroup::new(active))
    }

    /// Re-run a declarative block for an existing group, atomically
    /// replacing its active constraints with the new build's.
    ///
    /// The new block is compiled before anything is uninstalled, so a
    /// configuration error leaves the old constraints untouched. The old
    /// constraints are then removed in reverse installation order and the
    /// new set installed. Exactly the new build is active afterwards,
    /// never the union of old and new. Should the engine reject one of
    /// the new constraints mid-installation, the already-installed part
    /// of the new set is removed again and the group is left empty.
    pub fn replace<const N: usize, F>(
        &mut self,
        group: &mut ConstraintGroup,
        elements: [ElementId; N],
        build: F,
    ) -> Result<(), ConstraintError>
    where
        F: FnOnce(&mut Context, [LayoutProxy<'_>; N]) -> Result<(), ConstraintError>,
    {
        let constraints = self.run_block(elements, build)?;
        let planned = self.plan(constraints)?;

        let old = std::mem::take(&mut group.active);
        for active in old.iter().rev() {
            self.engine.remove(active.id);
        }

        group.active = self.install_planned(planned)?;
        Ok(())
    }

    /// Deactivate every constraint the group holds, in reverse
    /// installation order, and consume the group.
    pub fn discard(&mut self, group: ConstraintGroup) {
        for active in group.active.iter().rev() {
            self.engine.remove(active.id);
        }
    }

    /// Activate the constraints an already-filled context holds. Used by
    /// the convenience surfaces that assemble a context themselves.
    pub(crate) fn activate_block(
        &mut self,
        mut cx: Context,
    ) -> Result<ConstraintGroup, ConstraintError> {
        let planned = self.plan(cx.drain())?;
        let active = self.install_planned(planned)?;
        Ok(ConstraintGroup::new(active))
    }

    fn run_block<const N: usize, F>(
        &mut self,
        elements: [ElementId; N],
        build: F,
    ) -> Result<Vec<Constraint>, ConstraintError>
    where
        F: FnOnce(&mut Context, [LayoutProxy<'_>; N]) -> Result<(), ConstraintError>,
    {
        for element in elements {
            if !self.tree.contains(element) {
                return Err(ConstraintError::UnknownElement(element));
            }
        }
        let mut cx = Context::new();
        let tree = &self.tree;
        let proxies = elements.map(|element| LayoutProxy::new(tree, element));
        build(&mut cx, proxies)?;
        Ok(cx.drain())
    }

    /// Resolve the install target of every constraint before touching the
    /// engine, so configuration errors cannot leave a partial batch
    /// installed.
    fn plan(
        &self,
        constraints: Vec<Constraint>,
    ) -> Result<Vec<(ElementId, Constraint)>, ConstraintError> {
        constraints
            .into_iter()
            .map(|c| Ok((self.install_target(&c)?, c)))
            .collect()
    }

    fn install_target(&self, constraint: &Constraint) -> Result<ElementId, ConstraintError> {
        let first = constraint.first.element;
        if !self.tree.contains(first) {
            return Err(ConstraintError::UnknownElement(first));
        }
        match constraint.second {
            // constant-only constraints install on the element itself
            None => Ok(first),
            Some(second) => {
                if !self.tree.contains(second.element) {
                    return Err(ConstraintError::UnknownElement(second.element));
                }
                self.tree
                    .common_ancestor(first, second.element)
                    .ok_or(ConstraintError::NoCommonAncestor {
                        first,
                        second: second.element,
                    })
            }
        }
    }

    fn install_planned(
        &mut self,
        planned: Vec<(ElementId, Constraint)>,
    ) -> Result<Vec<ActiveConstraint>, ConstraintError> {
        let mut active: Vec<ActiveConstraint> = Vec::with_capacity(planned.len());
        for (target, constraint) in planned {
            let id = ConstraintId::new(self.next_id);
            self.next_id += 1;
            if let Err(rejection) = self.engine.install(id, target, &constraint) {
                // roll the batch back; none of this block survives
                for installed in active.iter().rev() {
                    self.engine.remove(installed.id);
                }
                return Err(ConstraintError::Rejected(rejection));
            }
            active.push(ActiveConstraint {
                id,
                target,
                constraint,
            });
        }
        // flags flip only once the whole batch is in, so a rejected block
        // leaves the frame-translation state untouched
        for installed in &active {
            self.tree
                .disable_frame_translation(installed.constraint.first.element);
            if let Some(second) = installed.constraint.second {
                self.tree.disable_frame_translation(second.element);
            }
        }
        Ok(active)
    }
}
