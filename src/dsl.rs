use crate::{
    context::LayoutContext,
    foundation::{
        core::{ItemId, Margins, Scalar, Size2},
        error::ensure,
    },
    model::flags::{Behave, Contain},
};

/// Fluent configuration of one freshly created item.
///
/// ```
/// use wavyte_layout::{Behave, Contain, LayoutContext};
///
/// let mut ctx = LayoutContext::new();
/// let root = ctx.build().size(1280, 720).contain(Contain::row()).id();
/// let sidebar = ctx
///     .build()
///     .size(400, 0)
///     .behave(Behave::vfill())
///     .insert_into(root);
/// let content = ctx.build().behave(Behave::fill()).insert_into(root);
/// ctx.run();
/// assert_eq!(ctx.rect(sidebar).xywh(), (0, 0, 400, 720));
/// assert_eq!(ctx.rect(content).xywh(), (400, 0, 880, 720));
/// ```
///
/// The item exists as soon as the builder does; dropping the builder leaves it unattached.
#[must_use = "the item is already created; finish with `id()` or attach it"]
pub struct ItemBuilder<'a> {
    ctx: &'a mut LayoutContext,
    id: ItemId,
}

impl LayoutContext {
    /// Create a new item and configure it fluently.
    pub fn build(&mut self) -> ItemBuilder<'_> {
        let id = self.item();
        ItemBuilder { ctx: self, id }
    }

    /// Configure an existing item fluently.
    #[track_caller]
    pub fn build_item(&mut self, id: ItemId) -> ItemBuilder<'_> {
        ensure(self.check(id));
        ItemBuilder { ctx: self, id }
    }
}

impl ItemBuilder<'_> {
    /// Explicit size; zero on an axis keeps that axis computed.
    #[must_use = "chain further settings or finish the builder"]
    pub fn size(self, width: Scalar, height: Scalar) -> Self {
        self.ctx.set_size(self.id, Size2::new(width, height));
        self
    }

    /// Behavior inside the parent.
    #[must_use = "chain further settings or finish the builder"]
    pub fn behave(self, behave: Behave) -> Self {
        self.ctx.set_behave(self.id, behave);
        self
    }

    /// How this item arranges its children.
    #[must_use = "chain further settings or finish the builder"]
    pub fn contain(self, contain: Contain) -> Self {
        self.ctx.set_contain(self.id, contain);
        self
    }

    /// Margins.
    #[must_use = "chain further settings or finish the builder"]
    pub fn margins(self, margins: Margins) -> Self {
        self.ctx.set_margins(self.id, margins);
        self
    }

    /// Finish and attach as the last child of `parent`.
    pub fn insert_into(self, parent: ItemId) -> ItemId {
        self.ctx.insert(parent, self.id);
        self.id
    }

    /// Finish and attach as the first child of `parent`.
    pub fn push_into(self, parent: ItemId) -> ItemId {
        self.ctx.push(parent, self.id);
        self.id
    }

    /// Finish and attach directly after `earlier`.
    pub fn append_after(self, earlier: ItemId) -> ItemId {
        self.ctx.append(earlier, self.id);
        self.id
    }

    /// Finish without attaching.
    #[must_use]
    pub fn id(self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
#[path = "../tests/unit/dsl.rs"]
mod tests;
