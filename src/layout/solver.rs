use smallvec::SmallVec;

use crate::{
    context::LayoutContext,
    foundation::{
        core::{Axis, ItemId},
        error::ensure,
    },
};

type ChildBuf = SmallVec<[ItemId; 16]>;

impl LayoutContext {
    /// Lay out the whole tree, starting at the root item.
    ///
    /// A no-op on an empty context. Afterwards every reachable item has a valid
    /// [`rect`](LayoutContext::rect).
    ///
    /// Re-running an unchanged tree reproduces the same rects, with one exception: a wrapping
    /// container without an explicit size along its wrap axis is measured on the first run
    /// before any line breaks are known, so it measures as one long line. Later runs measure
    /// it from the recorded lines and can move it. It settles from the second run on.
    pub fn run(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.run_item(ItemId::ROOT);
    }

    /// Lay out the subtree rooted at `id`.
    ///
    /// The subtree root is measured and positioned from its own size and margins; its
    /// ancestors are not consulted. Callers re-running a subtree must make sure that is what
    /// they want (typically: the subtree root has an explicit size).
    #[tracing::instrument(skip(self), fields(items = self.items.len()))]
    pub fn run_item(&mut self, id: ItemId) {
        ensure(self.check(id));
        // Horizontal fully completes before vertical: wrap decisions on the vertical pass
        // read the widths produced by the horizontal arrange.
        for axis in Axis::ALL {
            self.calc_size_tree(id, axis);
            self.arrange_tree(id, axis);
        }
        tracing::debug!(rect = ?self.rects[id.index()], "layout run finished");
    }

    // Post-order: every child is measured before its parent.
    fn calc_size_tree(&mut self, root: ItemId, axis: Axis) {
        let mut stack: Vec<(ItemId, bool)> = vec![(root, false)];
        while let Some((id, children_done)) = stack.pop() {
            if children_done {
                self.calc_size(id, axis);
                continue;
            }
            stack.push((id, true));
            let children: ChildBuf = self.children(id).collect();
            stack.extend(children.into_iter().rev().map(|c| (c, false)));
        }
    }

    // Pre-order: a parent is finalized before its children are arranged.
    fn arrange_tree(&mut self, root: ItemId, axis: Axis) {
        let mut stack: Vec<ItemId> = vec![root];
        while let Some(id) = stack.pop() {
            self.arrange(id, axis);
            let children: ChildBuf = self.children(id).collect();
            stack.extend(children.into_iter().rev());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
