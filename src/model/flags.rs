use crate::foundation::{
    core::Axis,
    error::{LayoutError, LayoutResult},
};

bitflags::bitflags! {
    /// Packed item flag word.
    ///
    /// Bit-compatible with the classic single-word layout encoding, so flag values coming from
    /// existing UI descriptions can be fed through [`Contain::from_bits`] and
    /// [`Behave::from_bits`]. Internally the engine keeps the typed representation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct ItemFlags: u32 {
        /// Direction bit: column when set, row otherwise.
        const DIRECTION_COLUMN = 0x001;
        /// Flex model (stacking) instead of free layout.
        const FLEX = 0x002;
        /// Multi-line wrapping.
        const WRAP = 0x004;
        /// Justify at start of the row/column.
        const START = 0x008;
        /// Justify at end of the row/column.
        const END = 0x010;
        /// Anchor to the left side of the parent.
        const LEFT = 0x020;
        /// Anchor to the top side of the parent.
        const TOP = 0x040;
        /// Anchor to the right side of the parent.
        const RIGHT = 0x080;
        /// Anchor to the bottom side of the parent.
        const BOTTOM = 0x100;
        /// Start a new line in a wrapping container.
        const BREAK = 0x200;
        /// Item already has a parent.
        const INSERTED = 0x400;
        /// Width was set explicitly.
        const HFIXED = 0x800;
        /// Height was set explicitly.
        const VFIXED = 0x1000;

        /// Left to right flex container.
        const ROW = Self::FLEX.bits();
        /// Top to bottom flex container.
        const COLUMN = Self::FLEX.bits() | Self::DIRECTION_COLUMN.bits();
        /// Insert spacing to stretch across the whole row/column.
        const JUSTIFY = Self::START.bits() | Self::END.bits();
        /// Fill horizontally.
        const HFILL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Fill vertically.
        const VFILL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Fill both axes.
        const FILL = Self::HFILL.bits() | Self::VFILL.bits();

        /// Bits accepted by [`Contain::from_bits`].
        const CONTAIN_MASK = 0x01F;
        /// Bits accepted by [`Behave::from_bits`].
        const BEHAVE_MASK = 0x3E0;
    }
}

/// Whether a container stacks its children or overlays them freely.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum BoxModel {
    /// Free layout: each child is anchored independently on both axes.
    #[default]
    Layout,
    /// Flex model: children are stacked along the primary axis.
    Flex,
}

/// Primary direction of a flex container.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Direction {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
}

impl Direction {
    /// Axis along which children are stacked.
    pub fn primary_axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Horizontal,
            Direction::Column => Axis::Vertical,
        }
    }
}

/// Distribution of leftover space along the primary axis.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Justify {
    /// Center the children as a group.
    #[default]
    Middle,
    /// Pack children at the start.
    Start,
    /// Pack children at the end.
    End,
    /// Spread children so the first and last touch the container edges.
    Justify,
}

/// How an item arranges its children.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Contain {
    /// Free layout or flex stacking.
    pub model: BoxModel,
    /// Primary direction (only meaningful for [`BoxModel::Flex`]).
    pub direction: Direction,
    /// Multi-line wrapping.
    pub wrap: bool,
    /// Leftover space distribution.
    pub justify: Justify,
}

impl Contain {
    /// Free layout container (the default).
    pub const fn layout() -> Self {
        Self {
            model: BoxModel::Layout,
            direction: Direction::Row,
            wrap: false,
            justify: Justify::Middle,
        }
    }

    /// Flex row, left to right.
    pub const fn row() -> Self {
        Self {
            model: BoxModel::Flex,
            ..Self::layout()
        }
    }

    /// Flex column, top to bottom.
    pub const fn column() -> Self {
        Self {
            model: BoxModel::Flex,
            direction: Direction::Column,
            ..Self::layout()
        }
    }

    /// Enable multi-line wrapping.
    pub const fn with_wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Replace the justify mode.
    pub const fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Flex direction, or `None` for the free layout model.
    pub fn flex_direction(self) -> Option<Direction> {
        match self.model {
            BoxModel::Flex => Some(self.direction),
            BoxModel::Layout => None,
        }
    }

    /// Encode into the packed flag word.
    pub fn to_flags(self) -> ItemFlags {
        let mut flags = ItemFlags::empty();
        if self.direction == Direction::Column {
            flags |= ItemFlags::DIRECTION_COLUMN;
        }
        if self.model == BoxModel::Flex {
            flags |= ItemFlags::FLEX;
        }
        if self.wrap {
            flags |= ItemFlags::WRAP;
        }
        flags |= match self.justify {
            Justify::Middle => ItemFlags::empty(),
            Justify::Start => ItemFlags::START,
            Justify::End => ItemFlags::END,
            Justify::Justify => ItemFlags::JUSTIFY,
        };
        flags
    }

    /// Decode container bits. Bits outside [`ItemFlags::CONTAIN_MASK`] are rejected.
    pub fn from_bits(bits: u32) -> LayoutResult<Self> {
        let mask = ItemFlags::CONTAIN_MASK.bits();
        if bits & !mask != 0 {
            return Err(LayoutError::FlagMask {
                what: "container",
                bits,
                mask,
            });
        }
        let flags = ItemFlags::from_bits_retain(bits);
        let justify = if flags.contains(ItemFlags::JUSTIFY) {
            Justify::Justify
        } else if flags.contains(ItemFlags::START) {
            Justify::Start
        } else if flags.contains(ItemFlags::END) {
            Justify::End
        } else {
            Justify::Middle
        };
        Ok(Self {
            model: if flags.contains(ItemFlags::FLEX) {
                BoxModel::Flex
            } else {
                BoxModel::Layout
            },
            direction: if flags.contains(ItemFlags::DIRECTION_COLUMN) {
                Direction::Column
            } else {
                Direction::Row
            },
            wrap: flags.contains(ItemFlags::WRAP),
            justify,
        })
    }
}

/// Placement of a child along one axis of its parent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Anchor {
    /// Centered, with the leading margin as offset.
    #[default]
    Center,
    /// Attached to the leading edge (left/top).
    Start,
    /// Attached to the trailing edge (right/bottom).
    End,
    /// Attached to both edges; absorbs available space.
    Fill,
}

impl Anchor {
    // Horizontal bit pattern; the vertical bits sit one position higher.
    fn horizontal_bits(self) -> u32 {
        match self {
            Anchor::Center => 0,
            Anchor::Start => ItemFlags::LEFT.bits(),
            Anchor::End => ItemFlags::RIGHT.bits(),
            Anchor::Fill => ItemFlags::HFILL.bits(),
        }
    }

    fn from_axis_bits(bits: u32, axis: Axis) -> Self {
        let left = ItemFlags::LEFT.bits();
        let right = ItemFlags::RIGHT.bits();
        match (bits >> axis.index()) & (left | right) {
            b if b == left | right => Anchor::Fill,
            b if b == left => Anchor::Start,
            b if b == right => Anchor::End,
            _ => Anchor::Center,
        }
    }
}

/// How an item wants to be placed inside its parent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Behave {
    /// Horizontal anchor.
    pub horizontal: Anchor,
    /// Vertical anchor.
    pub vertical: Anchor,
    /// Start a new line when the parent wraps (manual break).
    pub line_break: bool,
}

impl Behave {
    /// Explicit anchors on both axes.
    pub const fn new(horizontal: Anchor, vertical: Anchor) -> Self {
        Self {
            horizontal,
            vertical,
            line_break: false,
        }
    }

    /// Centered on both axes (the default).
    pub const fn center() -> Self {
        Self::new(Anchor::Center, Anchor::Center)
    }

    /// Fill both axes.
    pub const fn fill() -> Self {
        Self::new(Anchor::Fill, Anchor::Fill)
    }

    /// Fill horizontally, centered vertically.
    pub const fn hfill() -> Self {
        Self::new(Anchor::Fill, Anchor::Center)
    }

    /// Fill vertically, centered horizontally.
    pub const fn vfill() -> Self {
        Self::new(Anchor::Center, Anchor::Fill)
    }

    /// Anchored to the top-left corner.
    pub const fn top_left() -> Self {
        Self::new(Anchor::Start, Anchor::Start)
    }

    /// Force a line break before this item in a wrapping parent.
    pub const fn with_break(mut self) -> Self {
        self.line_break = true;
        self
    }

    /// Anchor on `axis`.
    pub fn anchor(self, axis: Axis) -> Anchor {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// `true` when the item fills `axis`.
    pub fn fills(self, axis: Axis) -> bool {
        self.anchor(axis) == Anchor::Fill
    }

    /// Encode into the packed flag word.
    pub fn to_flags(self) -> ItemFlags {
        let mut bits = self.horizontal.horizontal_bits() | (self.vertical.horizontal_bits() << 1);
        if self.line_break {
            bits |= ItemFlags::BREAK.bits();
        }
        ItemFlags::from_bits_retain(bits)
    }

    /// Decode behavior bits. Bits outside [`ItemFlags::BEHAVE_MASK`] are rejected.
    pub fn from_bits(bits: u32) -> LayoutResult<Self> {
        let mask = ItemFlags::BEHAVE_MASK.bits();
        if bits & !mask != 0 {
            return Err(LayoutError::FlagMask {
                what: "behavior",
                bits,
                mask,
            });
        }
        Ok(Self {
            horizontal: Anchor::from_axis_bits(bits, Axis::Horizontal),
            vertical: Anchor::from_axis_bits(bits, Axis::Vertical),
            line_break: bits & ItemFlags::BREAK.bits() != 0,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/flags.rs"]
mod tests;
