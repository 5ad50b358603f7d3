use crate::{
    context::LayoutContext,
    foundation::core::{Axis, ItemId, Scalar, truncate},
    model::flags::{Anchor, Direction, Justify},
};

/// One run of consecutive children that shares a line in a stacked arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Line {
    /// First child of the next line, or [`ItemId::INVALID`] for the last line.
    pub(crate) end: ItemId,
    /// Extent consumed by the line before distribution.
    pub(crate) used: Scalar,
    /// Children that fill the primary axis.
    pub(crate) fillers: u32,
    /// Children without an explicit size on the primary axis (fillers excluded).
    pub(crate) squeezable: u32,
    /// Children on the line.
    pub(crate) count: u32,
    /// The line was ended by a manual break on `end`.
    pub(crate) hard_break: bool,
}

/// How leftover (or missing) space is spread over one line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Distribution {
    /// Extra extent handed to each filler.
    pub(crate) filler: f64,
    /// Gap inserted between consecutive children.
    pub(crate) spacer: f64,
    /// Offset inserted before the first child.
    pub(crate) lead: f64,
    /// Extent added (negative) to each squeezable child.
    pub(crate) eater: f64,
}

impl Distribution {
    pub(crate) fn for_line(line: &Line, space: Scalar, justify: Justify, wrap: bool) -> Self {
        let mut dist = Self::default();
        let extra = space - line.used;
        if extra > 0 {
            let extra = f64::from(extra);
            if line.fillers > 0 {
                dist.filler = extra / f64::from(line.fillers);
            } else if line.count > 0 {
                match justify {
                    // Not applied to the last line of a wrapping container, nor to a line
                    // closed by a manual break.
                    Justify::Justify => {
                        let justified = !wrap || (line.end.is_valid() && !line.hard_break);
                        if justified && line.count > 1 {
                            dist.spacer = extra / f64::from(line.count - 1);
                        }
                    }
                    Justify::Start => {}
                    Justify::End => dist.lead = extra,
                    Justify::Middle => dist.lead = extra / 2.0,
                }
            }
        } else if !wrap && extra < 0 && line.squeezable > 0 {
            dist.eater = f64::from(extra) / f64::from(line.squeezable);
        }
        dist
    }
}

impl LayoutContext {
    /// Position the children of `id` along `axis`, after `id` itself is final.
    pub(crate) fn arrange(&mut self, id: ItemId, axis: Axis) {
        let item = &self.items[id.index()];
        let (contain, first) = (item.contain, item.first_child);
        match contain.flex_direction() {
            Some(Direction::Column) if contain.wrap => {
                // Both axes of a wrapping column are placed on the vertical pass: the
                // horizontal placement needs the vertical line breaks.
                if axis == Axis::Vertical {
                    self.arrange_stacked(id, Axis::Vertical, true);
                    let end = self.arrange_wrapped_overlay_squeezed(id, Axis::Horizontal);
                    let rect = &mut self.rects[id.index()];
                    rect.width = end.saturating_sub(rect.x);
                }
            }
            Some(Direction::Row) if contain.wrap => match axis {
                Axis::Horizontal => self.arrange_stacked(id, axis, true),
                Axis::Vertical => {
                    self.arrange_wrapped_overlay_squeezed(id, axis);
                }
            },
            Some(direction) if direction.primary_axis() == axis => {
                self.arrange_stacked(id, axis, false);
            }
            Some(_) => {
                let rect = self.rects[id.index()];
                self.arrange_overlay_squeezed_range(
                    axis,
                    first,
                    ItemId::INVALID,
                    rect.pos(axis),
                    rect.extent(axis),
                );
            }
            None => self.arrange_overlay(id, axis),
        }
    }

    fn arrange_stacked(&mut self, id: ItemId, axis: Axis, wrap: bool) {
        let item = &self.items[id.index()];
        let (justify, first) = (item.contain.justify, item.first_child);
        let rect = self.rects[id.index()];
        let space = rect.extent(axis);
        let max_end = f64::from(rect.pos(axis) + space);

        let mut start = first;
        while start.is_valid() {
            let line = self.measure_line(start, axis, space, wrap);
            let dist = Distribution::for_line(&line, space, justify, wrap);
            self.place_line(start, &line, axis, f64::from(rect.pos(axis)), max_end, wrap, dist);
            start = line.end;
        }
    }

    // First pass over a line: classify children and find where the line ends.
    fn measure_line(&mut self, start: ItemId, axis: Axis, space: Scalar, wrap: bool) -> Line {
        let mut line = Line {
            end: ItemId::INVALID,
            used: 0,
            fillers: 0,
            squeezable: 0,
            count: 0,
            hard_break: false,
        };

        let mut child = start;
        while child.is_valid() {
            let item = &self.items[child.index()];
            let rect = self.rects[child.index()];
            let far = item.margins.far(axis);
            let mut extend = line.used.saturating_add(rect.pos(axis)).saturating_add(far);
            if item.behave.fills(axis) {
                line.fillers += 1;
            } else {
                if !item.is_fixed(axis) {
                    line.squeezable += 1;
                }
                extend = extend.saturating_add(rect.extent(axis));
            }

            // The first child of a line never breaks, even if it overflows on its own.
            let manual = item.behave.line_break;
            if wrap && line.count != 0 && (extend > space || item.breaks_line()) {
                line.end = child;
                line.hard_break = manual;
                if !manual {
                    // Recorded so the cross-axis pass sees the same lines.
                    self.items[child.index()].auto_break = true;
                }
                tracing::trace!(item = child.raw(), manual, "line break");
                break;
            }

            line.used = extend;
            child = item.next_sibling;
            line.count += 1;
        }
        line
    }

    // Second pass over a line: write final positions and extents.
    #[allow(clippy::too_many_arguments)]
    fn place_line(
        &mut self,
        start: ItemId,
        line: &Line,
        axis: Axis,
        origin: f64,
        max_end: f64,
        wrap: bool,
        dist: Distribution,
    ) {
        let mut x = origin;
        let mut lead = dist.lead;
        let mut child = start;
        while child != line.end {
            let item = &self.items[child.index()];
            let (behave, fixed, far, next) = (
                item.behave,
                item.is_fixed(axis),
                f64::from(item.margins.far(axis)),
                item.next_sibling,
            );
            let rect = &mut self.rects[child.index()];

            x += f64::from(rect.pos(axis)) + lead;
            let x1 = if behave.fills(axis) {
                x + dist.filler
            } else if fixed {
                x + f64::from(rect.extent(axis))
            } else {
                x + (f64::from(rect.extent(axis)) + dist.eater).max(0.0)
            };

            let ix0 = truncate(x);
            let ix1 = if wrap {
                truncate((max_end - far).min(x1))
            } else {
                truncate(x1)
            };
            rect.set_pos(axis, ix0);
            rect.set_extent(axis, ix1 - ix0);

            x = x1 + far;
            child = next;
            lead = dist.spacer;
        }
    }

    // Free layout: each child anchored independently inside the parent.
    fn arrange_overlay(&mut self, id: ItemId, axis: Axis) {
        let parent = self.rects[id.index()];
        let (offset, space) = (parent.pos(axis), parent.extent(axis));

        let mut child = self.items[id.index()].first_child;
        while child.is_valid() {
            let item = &self.items[child.index()];
            let (anchor, far, next) = (
                item.behave.anchor(axis),
                item.margins.far(axis),
                item.next_sibling,
            );
            let rect = &mut self.rects[child.index()];
            let (pos, extent) = (rect.pos(axis), rect.extent(axis));
            match anchor {
                Anchor::Center => rect.set_pos(
                    axis,
                    pos.saturating_add(space.saturating_sub(extent) / 2)
                        .saturating_sub(far),
                ),
                Anchor::End => rect.set_pos(
                    axis,
                    pos.saturating_add(space.saturating_sub(extent))
                        .saturating_sub(far),
                ),
                Anchor::Fill => {
                    let room = space.saturating_sub(pos).saturating_sub(far).max(0);
                    rect.set_extent(axis, room);
                }
                Anchor::Start => {}
            }
            rect.set_pos(axis, rect.pos(axis).saturating_add(offset));
            child = next;
        }
    }

    // Cross-axis placement of children in `[start, end)`, clamped to `space`.
    fn arrange_overlay_squeezed_range(
        &mut self,
        axis: Axis,
        start: ItemId,
        end: ItemId,
        offset: Scalar,
        space: Scalar,
    ) {
        let mut child = start;
        while child != end {
            let item = &self.items[child.index()];
            let (anchor, far, next) = (
                item.behave.anchor(axis),
                item.margins.far(axis),
                item.next_sibling,
            );
            let rect = &mut self.rects[child.index()];
            let (pos, extent) = (rect.pos(axis), rect.extent(axis));
            let room = space.saturating_sub(pos).saturating_sub(far).max(0);
            match anchor {
                Anchor::Center => {
                    let extent = extent.min(room);
                    rect.set_extent(axis, extent);
                    rect.set_pos(
                        axis,
                        pos.saturating_add(space.saturating_sub(extent) / 2)
                            .saturating_sub(far),
                    );
                }
                Anchor::End => {
                    let extent = extent.min(room);
                    rect.set_extent(axis, extent);
                    rect.set_pos(axis, space.saturating_sub(extent).saturating_sub(far));
                }
                Anchor::Fill => rect.set_extent(axis, room),
                Anchor::Start => rect.set_extent(axis, extent.min(room)),
            }
            rect.set_pos(axis, rect.pos(axis).saturating_add(offset));
            child = next;
        }
    }

    // Cross-axis placement line by line. Returns the far edge of the last line.
    fn arrange_wrapped_overlay_squeezed(&mut self, id: ItemId, axis: Axis) -> Scalar {
        let mut offset = self.rects[id.index()].pos(axis);
        let mut line_extent: Scalar = 0;
        let mut line_start = self.items[id.index()].first_child;
        let mut child = line_start;
        while child.is_valid() {
            if self.items[child.index()].breaks_line() {
                self.arrange_overlay_squeezed_range(axis, line_start, child, offset, line_extent);
                offset = offset.saturating_add(line_extent);
                line_start = child;
                line_extent = 0;
            }
            line_extent = line_extent.max(self.outer_extent(child, axis));
            child = self.items[child.index()].next_sibling;
        }
        self.arrange_overlay_squeezed_range(axis, line_start, ItemId::INVALID, offset, line_extent);
        offset.saturating_add(line_extent)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arrange.rs"]
mod tests;
