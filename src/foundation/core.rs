pub use kurbo::Rect as KurboRect;

/// Scalar used for positions, sizes and margins.
///
/// Measured extents saturate at `Scalar::MAX` instead of overflowing. Placement math runs in
/// `f64`, so rects stay exact while coordinates keep well inside the `i32` range.
pub type Scalar = i32;

/// Stable, arena-relative handle of one layout item.
///
/// Handles are dense and assigned in creation order starting at [`ItemId::ROOT`]. They stay
/// valid until the owning [`crate::LayoutContext`] is reset or dropped.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(pub(crate) u32);

impl ItemId {
    /// The layout root. Always the first item created in a context.
    pub const ROOT: ItemId = ItemId(0);
    /// Reserved "no item" sentinel, distinct from every valid handle.
    pub const INVALID: ItemId = ItemId(u32::MAX);

    /// Rebuild a handle from its raw value (e.g. one stored by the caller).
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw handle value.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// `false` only for [`ItemId::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn into_option(self) -> Option<ItemId> {
        self.is_valid().then_some(self)
    }
}

/// Layout axis. Horizontal is always resolved before vertical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// x / width.
    Horizontal,
    /// y / height.
    Vertical,
}

impl Axis {
    /// Resolution order used by every layout run.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// `0` for horizontal, `1` for vertical.
    pub fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

/// Explicit item size. Zero on an axis means "derive from children".
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size2 {
    /// Width.
    #[serde(default)]
    pub width: Scalar,
    /// Height.
    #[serde(default)]
    pub height: Scalar,
}

impl Size2 {
    /// Build a size from width and height.
    pub const fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    /// Component along `axis`.
    pub fn get(self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Item margins in layout units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Margins {
    /// Left margin.
    #[serde(default)]
    pub left: Scalar,
    /// Top margin.
    #[serde(default)]
    pub top: Scalar,
    /// Right margin.
    #[serde(default)]
    pub right: Scalar,
    /// Bottom margin.
    #[serde(default)]
    pub bottom: Scalar,
}

impl Margins {
    /// Build margins from left, top, right, bottom.
    pub const fn ltrb(left: Scalar, top: Scalar, right: Scalar, bottom: Scalar) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same margin on all four sides.
    pub const fn uniform(v: Scalar) -> Self {
        Self::ltrb(v, v, v, v)
    }

    /// Leading margin along `axis` (left or top).
    pub fn near(self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Trailing margin along `axis` (right or bottom).
    pub fn far(self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}

/// Computed output rectangle of an item.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LayoutRect {
    /// Left edge.
    pub x: Scalar,
    /// Top edge.
    pub y: Scalar,
    /// Width.
    pub width: Scalar,
    /// Height.
    pub height: Scalar,
}

impl LayoutRect {
    /// Build a rect from position and extent.
    pub const fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Start position along `axis`.
    pub fn pos(self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Extent along `axis`.
    pub fn extent(self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub(crate) fn set_pos(&mut self, axis: Axis, v: Scalar) {
        match axis {
            Axis::Horizontal => self.x = v,
            Axis::Vertical => self.y = v,
        }
    }

    pub(crate) fn set_extent(&mut self, axis: Axis, v: Scalar) {
        match axis {
            Axis::Horizontal => self.width = v,
            Axis::Vertical => self.height = v,
        }
    }

    /// `(x, y, width, height)`.
    pub fn xywh(self) -> (Scalar, Scalar, Scalar, Scalar) {
        (self.x, self.y, self.width, self.height)
    }

    /// Convert to a kurbo rectangle for drawing code.
    pub fn to_kurbo(self) -> KurboRect {
        KurboRect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }
}

impl From<LayoutRect> for KurboRect {
    fn from(value: LayoutRect) -> Self {
        value.to_kurbo()
    }
}

/// Truncate a distribution intermediate back to the layout scalar (toward zero).
pub(crate) fn truncate(v: f64) -> Scalar {
    v as Scalar
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
