use crate::foundation::core::{Axis, ItemId, Margins, Size2};
use crate::model::flags::{Behave, Contain, ItemFlags};

/// One arena node. Tree links are child-list only: there is no parent pointer.
#[derive(Clone, Debug)]
pub(crate) struct Item {
    pub(crate) contain: Contain,
    pub(crate) behave: Behave,
    // Break recorded by a wrapping parent; kept apart from the caller's manual break.
    pub(crate) auto_break: bool,
    pub(crate) fixed: [bool; 2],
    pub(crate) inserted: bool,
    pub(crate) first_child: ItemId,
    pub(crate) next_sibling: ItemId,
    pub(crate) margins: Margins,
    pub(crate) size: Size2,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            contain: Contain::default(),
            behave: Behave::default(),
            auto_break: false,
            fixed: [false; 2],
            inserted: false,
            first_child: ItemId::INVALID,
            next_sibling: ItemId::INVALID,
            margins: Margins::default(),
            size: Size2::default(),
        }
    }
}

impl Item {
    pub(crate) fn is_fixed(&self, axis: Axis) -> bool {
        self.fixed[axis.index()]
    }

    /// Starts a new line in a wrapping parent, manually or from an earlier run.
    pub(crate) fn breaks_line(&self) -> bool {
        self.behave.line_break || self.auto_break
    }

    pub(crate) fn set_size(&mut self, size: Size2) {
        self.size = size;
        // Fixed bits track whether each axis has an explicit size.
        self.fixed = [size.width != 0, size.height != 0];
    }

    pub(crate) fn flags(&self) -> ItemFlags {
        let mut flags = self.contain.to_flags() | self.behave.to_flags();
        flags.set(ItemFlags::BREAK, self.breaks_line());
        flags.set(ItemFlags::INSERTED, self.inserted);
        flags.set(ItemFlags::HFIXED, self.fixed[0]);
        flags.set(ItemFlags::VFIXED, self.fixed[1]);
        flags
    }
}
