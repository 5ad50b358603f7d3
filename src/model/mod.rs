pub(crate) mod flags;
pub(crate) mod item;
