//! Wavyte layout is a small, dependency-light box layout engine.
//!
//! Callers build a tree of rectangular items, describe how each item arranges its children
//! ([`Contain`]) and how it sits inside its parent ([`Behave`]), then run the engine and read
//! back one [`LayoutRect`] per item. The problem class is a subset of CSS flexbox: row/column
//! stacking, multi-line wrapping, margins, fixed sizes, fill/squeeze distribution and
//! justification.
//!
//! # Algorithm overview
//!
//! Each run resolves the horizontal axis completely, then the vertical axis:
//!
//! 1. **Measure** (bottom-up): an item's extent is its explicit size, or derived from its
//!    children (summed when stacked, maxed when overlaid).
//! 2. **Arrange** (top-down): the parent's final rect is distributed among its children
//!    (fillers grow, squeezable children shrink, justify spreads leftover space).
//!
//! # Contract
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same tree always produces bit-identical rects.
//! - **Misuse panics**: invalid handles, re-parenting and out-of-mask flag bits are programming
//!   errors. The `try_*` methods report them as [`LayoutError`] instead.
//! - **Acyclic trees**: linking an item under one of its own descendants is not detected and
//!   leaves a cycle that a run never leaves. Callers must not do it.
//! - **No rendering**: the engine never calls outward; drawing code reads rects after a run.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod context;
mod dsl;
mod foundation;
mod layout;
mod model;
mod settings;

pub use context::{Children, LayoutContext};
pub use dsl::ItemBuilder;
pub use foundation::core::{Axis, ItemId, LayoutRect, Margins, Scalar, Size2};
pub use foundation::error::{LayoutError, LayoutResult};
pub use model::flags::{Anchor, Behave, BoxModel, Contain, Direction, ItemFlags, Justify};
pub use settings::ContextSettings;
