use crate::foundation::error::{LayoutError, LayoutResult};

/// Construction-time configuration of a [`crate::LayoutContext`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContextSettings {
    /// Number of items to reserve up front.
    pub initial_capacity: usize,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

impl ContextSettings {
    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json_str(s: &str) -> LayoutResult<Self> {
        serde_json::from_str(s).map_err(|e| LayoutError::settings(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
