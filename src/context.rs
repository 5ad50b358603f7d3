use crate::{
    foundation::{
        core::{Axis, ItemId, LayoutRect, Margins, Scalar, Size2},
        error::{LayoutError, LayoutResult, ensure},
    },
    model::{
        flags::{Behave, Contain, ItemFlags},
        item::Item,
    },
    settings::ContextSettings,
};

/// Owner of one layout tree: the item arena plus the parallel output rects.
///
/// Items are append-only. Handles are never reused while the context lives; [`reset`] and
/// dropping the context invalidate all of them at once.
///
/// Rects read with [`rect`] are valid after a [`run`] and until the next structural change.
/// Re-running after changing sizes is cheap and the intended way to animate a resize.
///
/// [`reset`]: LayoutContext::reset
/// [`rect`]: LayoutContext::rect
/// [`run`]: LayoutContext::run
#[derive(Clone, Debug, Default)]
pub struct LayoutContext {
    pub(crate) items: Vec<Item>,
    pub(crate) rects: Vec<LayoutRect>,
}

impl LayoutContext {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty context with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            rects: Vec::with_capacity(capacity),
        }
    }

    /// Empty context configured from `settings`.
    pub fn from_settings(settings: &ContextSettings) -> Self {
        Self::with_capacity(settings.initial_capacity)
    }

    /// Reserve room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
        self.rects.reserve(additional);
    }

    /// Drop every item while keeping the allocation. All handles become invalid.
    pub fn reset(&mut self) {
        self.items.clear();
        self.rects.clear();
    }

    /// Number of items created so far.
    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    /// Every handle issued so far, in creation order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + use<> {
        // `item()` never issues more than `u32::MAX - 1` handles.
        (0..self.items.len() as u32).map(ItemId)
    }

    /// Number of items the context can hold without reallocating.
    pub fn items_capacity(&self) -> usize {
        self.items.capacity().min(self.rects.capacity())
    }

    /// Create a new unattached item with default flags, zero size and zero margins.
    ///
    /// The first item created is the layout root.
    pub fn item(&mut self) -> ItemId {
        let raw = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        assert!(raw != ItemId::INVALID.raw(), "layout arena is full");
        let id = ItemId(raw);
        self.items.push(Item::default());
        self.rects.push(LayoutRect::default());
        id
    }

    pub(crate) fn check(&self, id: ItemId) -> LayoutResult<usize> {
        if !id.is_valid() {
            return Err(LayoutError::InvalidHandle);
        }
        if id.index() >= self.items.len() {
            return Err(LayoutError::OutOfRange {
                id: id.raw(),
                count: self.items.len(),
            });
        }
        Ok(id.index())
    }

    #[track_caller]
    fn slot(&self, id: ItemId) -> &Item {
        &self.items[ensure(self.check(id))]
    }

    #[track_caller]
    fn slot_mut(&mut self, id: ItemId) -> &mut Item {
        let idx = ensure(self.check(id));
        &mut self.items[idx]
    }

    fn check_link(&self, anchor: ItemId, child: ItemId) -> LayoutResult<()> {
        self.check(anchor)?;
        let idx = self.check(child)?;
        if child == ItemId::ROOT {
            return Err(LayoutError::RootAsChild);
        }
        if anchor == child {
            return Err(LayoutError::SelfLink(child.raw()));
        }
        if self.items[idx].inserted {
            return Err(LayoutError::AlreadyInserted(child.raw()));
        }
        Ok(())
    }

    /// Append `child` at the end of `parent`'s child list. Walks the existing siblings.
    #[track_caller]
    pub fn insert(&mut self, parent: ItemId, child: ItemId) {
        ensure(self.try_insert(parent, child));
    }

    /// Fallible form of [`LayoutContext::insert`].
    pub fn try_insert(&mut self, parent: ItemId, child: ItemId) -> LayoutResult<()> {
        self.check_link(parent, child)?;
        match self.last_child(parent) {
            Some(last) => self.link_after(last, child),
            None => {
                self.items[parent.index()].first_child = child;
                self.items[child.index()].inserted = true;
            }
        }
        Ok(())
    }

    /// Insert `later` directly after `earlier` in whatever list `earlier` belongs to.
    ///
    /// O(1); prefer this over repeated [`insert`](LayoutContext::insert) for long child lists.
    #[track_caller]
    pub fn append(&mut self, earlier: ItemId, later: ItemId) {
        ensure(self.try_append(earlier, later));
    }

    /// Fallible form of [`LayoutContext::append`].
    pub fn try_append(&mut self, earlier: ItemId, later: ItemId) -> LayoutResult<()> {
        self.check_link(earlier, later)?;
        self.link_after(earlier, later);
        Ok(())
    }

    /// Make `child` the first child of `parent`, shifting the previous first child back.
    #[track_caller]
    pub fn push(&mut self, parent: ItemId, child: ItemId) {
        ensure(self.try_push(parent, child));
    }

    /// Fallible form of [`LayoutContext::push`].
    pub fn try_push(&mut self, parent: ItemId, child: ItemId) -> LayoutResult<()> {
        self.check_link(parent, child)?;
        let old_first = self.items[parent.index()].first_child;
        self.items[parent.index()].first_child = child;
        let item = &mut self.items[child.index()];
        item.inserted = true;
        item.next_sibling = old_first;
        Ok(())
    }

    fn link_after(&mut self, earlier: ItemId, later: ItemId) {
        let next = self.items[earlier.index()].next_sibling;
        let item = &mut self.items[later.index()];
        item.next_sibling = next;
        item.inserted = true;
        self.items[earlier.index()].next_sibling = later;
    }

    /// First child of `id`, if any.
    #[track_caller]
    pub fn first_child(&self, id: ItemId) -> Option<ItemId> {
        self.slot(id).first_child.into_option()
    }

    /// Next sibling of `id`, if any.
    #[track_caller]
    pub fn next_sibling(&self, id: ItemId) -> Option<ItemId> {
        self.slot(id).next_sibling.into_option()
    }

    /// Last child of `id`, if any. Walks the child list.
    #[track_caller]
    pub fn last_child(&self, id: ItemId) -> Option<ItemId> {
        self.children(id).last()
    }

    /// Iterate the children of `id` in order.
    #[track_caller]
    pub fn children(&self, id: ItemId) -> Children<'_> {
        Children {
            items: &self.items,
            next: self.slot(id).first_child,
        }
    }

    /// Set the explicit size. Zero on an axis lets that axis be computed from children.
    #[track_caller]
    pub fn set_size(&mut self, id: ItemId, size: Size2) {
        self.slot_mut(id).set_size(size);
    }

    /// [`LayoutContext::set_size`] with separate components.
    #[track_caller]
    pub fn set_size_xy(&mut self, id: ItemId, width: Scalar, height: Scalar) {
        self.set_size(id, Size2::new(width, height));
    }

    /// Explicit size as last set.
    #[track_caller]
    pub fn size(&self, id: ItemId) -> Size2 {
        self.slot(id).size
    }

    /// `(width, height)` as last set.
    #[track_caller]
    pub fn size_xy(&self, id: ItemId) -> (Scalar, Scalar) {
        let s = self.size(id);
        (s.width, s.height)
    }

    /// `true` when `axis` has an explicit, non-zero size.
    #[track_caller]
    pub fn is_fixed(&self, id: ItemId, axis: Axis) -> bool {
        self.slot(id).is_fixed(axis)
    }

    /// `true` once the item has been attached to a parent.
    #[track_caller]
    pub fn is_inserted(&self, id: ItemId) -> bool {
        self.slot(id).inserted
    }

    /// Replace how the item behaves inside its parent. Container settings are untouched.
    ///
    /// Also drops a line break recorded by a previous run.
    #[track_caller]
    pub fn set_behave(&mut self, id: ItemId, behave: Behave) {
        let item = self.slot_mut(id);
        item.behave = behave;
        item.auto_break = false;
    }

    /// [`LayoutContext::set_behave`] from raw behavior bits.
    ///
    /// Panics if `bits` falls outside [`ItemFlags::BEHAVE_MASK`].
    #[track_caller]
    pub fn set_behave_bits(&mut self, id: ItemId, bits: u32) {
        let behave = ensure(Behave::from_bits(bits));
        self.set_behave(id, behave);
    }

    /// Current child behavior as set by the caller. Breaks recorded by a run show up in
    /// [`LayoutContext::flags`] only.
    #[track_caller]
    pub fn behave(&self, id: ItemId) -> Behave {
        self.slot(id).behave
    }

    /// Replace how the item arranges its children. Behavior settings are untouched.
    #[track_caller]
    pub fn set_contain(&mut self, id: ItemId, contain: Contain) {
        self.slot_mut(id).contain = contain;
    }

    /// [`LayoutContext::set_contain`] from raw container bits.
    ///
    /// Panics if `bits` falls outside [`ItemFlags::CONTAIN_MASK`].
    #[track_caller]
    pub fn set_contain_bits(&mut self, id: ItemId, bits: u32) {
        let contain = ensure(Contain::from_bits(bits));
        self.set_contain(id, contain);
    }

    /// Current container settings.
    #[track_caller]
    pub fn contain(&self, id: ItemId) -> Contain {
        self.slot(id).contain
    }

    /// Full packed flag word, including the inserted and fixed bits.
    #[track_caller]
    pub fn flags(&self, id: ItemId) -> ItemFlags {
        self.slot(id).flags()
    }

    /// Overwrite the margins.
    #[track_caller]
    pub fn set_margins(&mut self, id: ItemId, margins: Margins) {
        self.slot_mut(id).margins = margins;
    }

    /// [`LayoutContext::set_margins`] with separate components.
    #[track_caller]
    pub fn set_margins_ltrb(
        &mut self,
        id: ItemId,
        left: Scalar,
        top: Scalar,
        right: Scalar,
        bottom: Scalar,
    ) {
        self.set_margins(id, Margins::ltrb(left, top, right, bottom));
    }

    /// Margins as last set.
    #[track_caller]
    pub fn margins(&self, id: ItemId) -> Margins {
        self.slot(id).margins
    }

    /// `(left, top, right, bottom)` as last set.
    #[track_caller]
    pub fn margins_ltrb(&self, id: ItemId) -> (Scalar, Scalar, Scalar, Scalar) {
        let m = self.margins(id);
        (m.left, m.top, m.right, m.bottom)
    }

    /// Clear the line-break marker of one item.
    ///
    /// Wrapping containers record automatic breaks on their children during a run. Before
    /// re-running after the container extent changed, clear the marker on every child of the
    /// wrapping container or the stale breaks are kept. This also drops manual breaks.
    #[track_caller]
    pub fn clear_item_break(&mut self, id: ItemId) {
        let item = self.slot_mut(id);
        item.behave.line_break = false;
        item.auto_break = false;
    }

    /// Computed rectangle of `id`.
    #[track_caller]
    pub fn rect(&self, id: ItemId) -> LayoutRect {
        ensure(self.try_rect(id))
    }

    /// Fallible form of [`LayoutContext::rect`].
    pub fn try_rect(&self, id: ItemId) -> LayoutResult<LayoutRect> {
        let idx = self.check(id)?;
        Ok(self.rects[idx])
    }

    /// `(x, y, width, height)` of `id`.
    #[track_caller]
    pub fn rect_xywh(&self, id: ItemId) -> (Scalar, Scalar, Scalar, Scalar) {
        self.rect(id).xywh()
    }
}

/// Iterator over one item's child list.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    items: &'a [Item],
    next: ItemId,
}

impl Iterator for Children<'_> {
    type Item = ItemId;

    fn next(&mut self) -> Option<ItemId> {
        let cur = self.next.into_option()?;
        self.next = self.items[cur.index()].next_sibling;
        Some(cur)
    }
}

#[cfg(test)]
#[path = "../tests/unit/context.rs"]
mod tests;
