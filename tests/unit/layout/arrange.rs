use super::*;
use crate::{
    foundation::core::{LayoutRect, Margins, Size2},
    model::flags::{Behave, Contain, ItemFlags},
};

fn line(used: Scalar, count: u32) -> Line {
    Line {
        end: ItemId::INVALID,
        used,
        fillers: 0,
        squeezable: 0,
        count,
        hard_break: false,
    }
}

#[test]
fn fillers_take_all_extra_space() {
    let l = Line {
        fillers: 2,
        ..line(100, 3)
    };
    let d = Distribution::for_line(&l, 300, Justify::Justify, false);
    assert_eq!(
        d,
        Distribution {
            filler: 100.0,
            ..Distribution::default()
        }
    );
}

#[test]
fn justify_modes_split_extra_space() {
    let l = line(150, 3);
    assert_eq!(Distribution::for_line(&l, 300, Justify::Start, false), Distribution::default());
    assert_eq!(Distribution::for_line(&l, 300, Justify::End, false).lead, 150.0);
    assert_eq!(Distribution::for_line(&l, 300, Justify::Middle, false).lead, 75.0);
    assert_eq!(Distribution::for_line(&l, 300, Justify::Justify, false).spacer, 75.0);
}

#[test]
fn justify_needs_two_children() {
    let d = Distribution::for_line(&line(50, 1), 300, Justify::Justify, false);
    assert_eq!(d, Distribution::default());
}

#[test]
fn justify_skips_last_and_hard_broken_wrapped_lines() {
    let last = line(150, 3);
    assert_eq!(Distribution::for_line(&last, 300, Justify::Justify, true).spacer, 0.0);

    let soft = Line {
        end: ItemId::from_raw(4),
        ..line(150, 3)
    };
    assert_eq!(Distribution::for_line(&soft, 300, Justify::Justify, true).spacer, 75.0);

    let hard = Line {
        hard_break: true,
        ..soft
    };
    assert_eq!(Distribution::for_line(&hard, 300, Justify::Justify, true).spacer, 0.0);
}

#[test]
fn overflow_is_eaten_by_squeezable_children_only() {
    let l = Line {
        squeezable: 3,
        ..line(180, 3)
    };
    assert_eq!(Distribution::for_line(&l, 120, Justify::Middle, false).eater, -20.0);
    // Wrapping lines never squeeze.
    assert_eq!(Distribution::for_line(&l, 120, Justify::Middle, true).eater, 0.0);

    let rigid = line(180, 3);
    assert_eq!(Distribution::for_line(&rigid, 120, Justify::Middle, false), Distribution::default());
}

fn row_of_fixed(justify: Justify) -> (LayoutContext, Vec<ItemId>) {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(300, 50));
    ctx.set_contain(root, Contain::row().with_justify(justify));
    let ids = (0..3)
        .map(|_| {
            let id = ctx.item();
            ctx.set_size(id, Size2::new(50, 50));
            ctx.insert(root, id);
            id
        })
        .collect();
    ctx.run();
    (ctx, ids)
}

#[test]
fn stacked_row_honours_justify() {
    for (justify, xs) in [
        (Justify::Start, [0, 50, 100]),
        (Justify::End, [150, 200, 250]),
        (Justify::Middle, [75, 125, 175]),
        (Justify::Justify, [0, 125, 250]),
    ] {
        let (ctx, ids) = row_of_fixed(justify);
        let got: Vec<Scalar> = ids.iter().map(|&id| ctx.rect(id).x).collect();
        assert_eq!(got, xs, "{justify:?}");
        assert!(ids.iter().all(|&id| ctx.rect(id).y == 0));
    }
}

#[test]
fn fillers_share_leftover_width() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(300, 20));
    ctx.set_contain(root, Contain::row());
    let fixed = ctx.item();
    ctx.set_size(fixed, Size2::new(100, 10));
    ctx.insert(root, fixed);
    let fillers: Vec<ItemId> = (0..2)
        .map(|_| {
            let id = ctx.item();
            ctx.set_behave(id, Behave::hfill());
            ctx.insert(root, id);
            id
        })
        .collect();
    ctx.run();
    assert_eq!(ctx.rect(fixed).xywh().0, 0);
    assert_eq!((ctx.rect(fillers[0]).x, ctx.rect(fillers[0]).width), (100, 100));
    assert_eq!((ctx.rect(fillers[1]).x, ctx.rect(fillers[1]).width), (200, 100));
}

#[test]
fn unsized_children_shrink_on_overflow() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(120, 10));
    ctx.set_contain(root, Contain::row());
    let cells: Vec<ItemId> = (0..3)
        .map(|_| {
            let cell = ctx.item();
            ctx.insert(root, cell);
            let content = ctx.item();
            ctx.set_size(content, Size2::new(60, 10));
            ctx.insert(cell, content);
            cell
        })
        .collect();
    ctx.run();
    let got: Vec<(Scalar, Scalar)> = cells
        .iter()
        .map(|&c| (ctx.rect(c).x, ctx.rect(c).width))
        .collect();
    assert_eq!(got, vec![(0, 40), (40, 40), (80, 40)]);
}

#[test]
fn free_layout_anchors_respect_margins() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(200, 200));

    let corner = ctx.item();
    ctx.set_size(corner, Size2::new(50, 40));
    ctx.set_margins(corner, Margins::ltrb(10, 20, 30, 40));
    ctx.set_behave(corner, Behave::top_left());
    ctx.insert(root, corner);

    let filled = ctx.item();
    ctx.set_margins(filled, Margins::uniform(5));
    ctx.set_behave(filled, Behave::fill());
    ctx.insert(root, filled);

    let right = ctx.item();
    ctx.set_size(right, Size2::new(50, 10));
    ctx.set_margins(right, Margins::ltrb(0, 0, 30, 0));
    ctx.set_behave(right, Behave::new(Anchor::End, Anchor::Start));
    ctx.insert(root, right);

    let centered = ctx.item();
    ctx.set_size(centered, Size2::new(50, 10));
    ctx.set_margins(centered, Margins::ltrb(10, 0, 0, 0));
    ctx.insert(root, centered);

    ctx.run();
    assert_eq!(ctx.rect(corner), LayoutRect::new(10, 20, 50, 40));
    assert_eq!(ctx.rect(filled), LayoutRect::new(5, 5, 190, 190));
    assert_eq!(ctx.rect(right).x, 120);
    assert_eq!(ctx.rect(centered).x, 85);
}

#[test]
fn column_cross_axis_fill() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(100, 300));
    ctx.set_contain(root, Contain::column());
    let ids: Vec<ItemId> = (0..2)
        .map(|_| {
            let id = ctx.item();
            ctx.set_size(id, Size2::new(0, 50));
            ctx.set_behave(id, Behave::hfill());
            ctx.insert(root, id);
            id
        })
        .collect();
    ctx.run();
    assert_eq!(ctx.rect(ids[0]), LayoutRect::new(0, 100, 100, 50));
    assert_eq!(ctx.rect(ids[1]), LayoutRect::new(0, 150, 100, 50));
}

#[test]
fn cross_axis_end_is_clamped_to_parent() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(100, 40));
    ctx.set_contain(root, Contain::row().with_justify(Justify::Start));
    let tall = ctx.item();
    ctx.set_size(tall, Size2::new(20, 60));
    ctx.set_behave(tall, Behave::new(Anchor::Start, Anchor::End));
    ctx.insert(root, tall);
    ctx.run();
    assert_eq!(ctx.rect(tall), LayoutRect::new(0, 0, 20, 40));
}

#[test]
fn wrapping_row_breaks_and_records_markers() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(100, 100));
    ctx.set_contain(root, Contain::row().with_wrap().with_justify(Justify::Start));
    let ids: Vec<ItemId> = [20, 30, 10, 25]
        .into_iter()
        .map(|h| {
            let id = ctx.item();
            ctx.set_size(id, Size2::new(40, h));
            ctx.set_behave(id, Behave::top_left());
            ctx.insert(root, id);
            id
        })
        .collect();
    ctx.run();
    assert_eq!(ctx.rect(ids[0]), LayoutRect::new(0, 0, 40, 20));
    assert_eq!(ctx.rect(ids[1]), LayoutRect::new(40, 0, 40, 30));
    assert_eq!(ctx.rect(ids[2]), LayoutRect::new(0, 30, 40, 10));
    assert_eq!(ctx.rect(ids[3]), LayoutRect::new(40, 30, 40, 25));
    assert!(ctx.flags(ids[2]).contains(ItemFlags::BREAK));
    assert!(!ctx.flags(ids[3]).contains(ItemFlags::BREAK));
    // Recorded breaks are not manual ones.
    assert!(!ctx.behave(ids[2]).line_break);
}

fn justified_wrapping_row(manual: Option<usize>) -> (LayoutContext, Vec<ItemId>) {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(100, 100));
    ctx.set_contain(root, Contain::row().with_wrap().with_justify(Justify::Justify));
    let ids = (0..4)
        .map(|i| {
            let id = ctx.item();
            ctx.set_size(id, Size2::new(30, 10));
            let behave = Behave::top_left();
            ctx.set_behave(id, if manual == Some(i) { behave.with_break() } else { behave });
            ctx.insert(root, id);
            id
        })
        .collect();
    (ctx, ids)
}

#[test]
fn rerunning_justified_wrapping_row_is_stable() {
    let (mut ctx, ids) = justified_wrapping_row(None);
    ctx.run();
    let first = ctx.rects.clone();
    let xs: Vec<Scalar> = ids.iter().map(|&id| ctx.rect(id).x).collect();
    assert_eq!(xs, vec![0, 35, 70, 0]);
    assert_eq!(ctx.rect(ids[3]).y, 10);

    ctx.run();
    assert_eq!(ctx.rects, first);
    ctx.run();
    assert_eq!(ctx.rects, first);
}

#[test]
fn manual_break_line_is_not_justified() {
    let (mut ctx, ids) = justified_wrapping_row(Some(2));
    ctx.run();
    ctx.run();
    let xs: Vec<Scalar> = ids.iter().map(|&id| ctx.rect(id).x).collect();
    // The first line ends at a manual break and stays packed; the last line too.
    assert_eq!(xs, vec![0, 30, 0, 30]);
    assert!(ctx.behave(ids[2]).line_break);
}

#[test]
fn set_behave_drops_recorded_break() {
    let (mut ctx, ids) = justified_wrapping_row(None);
    ctx.run();
    assert!(ctx.flags(ids[3]).contains(ItemFlags::BREAK));
    ctx.set_behave(ids[3], Behave::top_left());
    assert!(!ctx.flags(ids[3]).contains(ItemFlags::BREAK));

    ctx.run();
    ctx.clear_item_break(ids[3]);
    assert!(!ctx.flags(ids[3]).contains(ItemFlags::BREAK));
}

#[test]
fn wrapping_column_backfills_width() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item();
    ctx.set_size(root, Size2::new(100, 100));
    ctx.set_contain(root, Contain::column().with_wrap().with_justify(Justify::Start));
    let ids: Vec<ItemId> = (0..3)
        .map(|_| {
            let id = ctx.item();
            ctx.set_size(id, Size2::new(30, 40));
            ctx.set_behave(id, Behave::top_left());
            ctx.insert(root, id);
            id
        })
        .collect();
    ctx.run();
    assert_eq!(ctx.rect(ids[0]), LayoutRect::new(0, 0, 30, 40));
    assert_eq!(ctx.rect(ids[1]), LayoutRect::new(0, 40, 30, 40));
    assert_eq!(ctx.rect(ids[2]), LayoutRect::new(30, 0, 30, 40));
    assert_eq!(ctx.rect(root).width, 60);
}
