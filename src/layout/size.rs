use crate::{
    context::LayoutContext,
    foundation::core::{Axis, ItemId, Scalar},
    model::flags::Direction,
};

impl LayoutContext {
    /// Measure one item on `axis`. Its children must already be measured.
    pub(crate) fn calc_size(&mut self, id: ItemId, axis: Axis) {
        let item = &self.items[id.index()];
        let (margins, explicit, contain) = (item.margins, item.size.get(axis), item.contain);

        self.rects[id.index()].set_pos(axis, margins.near(axis));

        if explicit != 0 {
            self.rects[id.index()].set_extent(axis, explicit);
            return;
        }

        let computed = match contain.flex_direction() {
            Some(Direction::Column) if contain.wrap => match axis {
                Axis::Vertical => self.stacked_size(id, axis),
                Axis::Horizontal => self.overlayed_size(id, axis),
            },
            Some(Direction::Row) if contain.wrap => match axis {
                Axis::Horizontal => self.wrapped_stacked_size(id, axis),
                Axis::Vertical => self.wrapped_overlayed_size(id, axis),
            },
            Some(direction) if direction.primary_axis() == axis => self.stacked_size(id, axis),
            _ => self.overlayed_size(id, axis),
        };
        self.rects[id.index()].set_extent(axis, computed);
    }

    /// Leading margin + extent + trailing margin of a measured child.
    pub(crate) fn outer_extent(&self, child: ItemId, axis: Axis) -> Scalar {
        let rect = self.rects[child.index()];
        rect.pos(axis)
            .saturating_add(rect.extent(axis))
            .saturating_add(self.items[child.index()].margins.far(axis))
    }

    fn stacked_size(&self, id: ItemId, axis: Axis) -> Scalar {
        self.children(id)
            .map(|c| self.outer_extent(c, axis))
            .fold(0, Scalar::saturating_add)
    }

    fn overlayed_size(&self, id: ItemId, axis: Axis) -> Scalar {
        self.children(id)
            .map(|c| self.outer_extent(c, axis))
            .fold(0, Scalar::max)
    }

    // Longest line wins; lines are separated by break markers.
    fn wrapped_stacked_size(&self, id: ItemId, axis: Axis) -> Scalar {
        let mut longest: Scalar = 0;
        let mut line: Scalar = 0;
        for child in self.children(id) {
            if self.items[child.index()].breaks_line() {
                longest = longest.max(line);
                line = 0;
            }
            line = line.saturating_add(self.outer_extent(child, axis));
        }
        longest.max(line)
    }

    // Tallest child per line, lines summed.
    fn wrapped_overlayed_size(&self, id: ItemId, axis: Axis) -> Scalar {
        let mut finished: Scalar = 0;
        let mut line: Scalar = 0;
        for child in self.children(id) {
            if self.items[child.index()].breaks_line() {
                finished = finished.saturating_add(line);
                line = 0;
            }
            line = line.max(self.outer_extent(child, axis));
        }
        finished.saturating_add(line)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/size.rs"]
mod tests;
