//! Two-pass layout: bottom-up measurement, then top-down placement, horizontal axis first.

pub(crate) mod arrange;
pub(crate) mod size;
pub(crate) mod solver;
