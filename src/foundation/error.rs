/// Convenience result type used across the layout engine.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Precondition violations and configuration failures.
///
/// Tree and accessor misuse is a programming error: the infallible [`crate::LayoutContext`]
/// methods panic with this error's message, while the `try_*` variants return it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The reserved invalid handle was passed where an item is required.
    #[error("invalid item handle")]
    InvalidHandle,

    /// The handle does not belong to the current arena.
    #[error("item {id} is out of range (context holds {count} items)")]
    OutOfRange {
        /// Raw handle value.
        id: u32,
        /// Number of items in the context.
        count: usize,
    },

    /// The root item may never become a child.
    #[error("the root item cannot be inserted into another item")]
    RootAsChild,

    /// An item cannot be linked to itself.
    #[error("item {0} cannot be linked to itself")]
    SelfLink(u32),

    /// The item already has a parent.
    #[error("item {0} is already inserted")]
    AlreadyInserted(u32),

    /// Raw flag bits fall outside the permitted mask.
    #[error("{what} flags {bits:#x} fall outside mask {mask:#x}")]
    FlagMask {
        /// Which flag group was being converted.
        what: &'static str,
        /// Offending bits.
        bits: u32,
        /// Permitted mask.
        mask: u32,
    },

    /// Invalid configuration input.
    #[error("settings error: {0}")]
    Settings(String),
}

impl LayoutError {
    /// Build a [`LayoutError::Settings`] value.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

/// Unwrap a precondition check, aborting the caller on violation.
#[track_caller]
pub(crate) fn ensure<T>(res: LayoutResult<T>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => panic!("layout precondition violated: {e}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
