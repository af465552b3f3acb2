//! Solver configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Stop after this many augmentations even if more paths remain. A capped solve that stops
    /// early reports [`MaxFlow::is_complete`](crate::MaxFlow::is_complete) as `false` and its value
    /// is a lower bound, not the maximum.
    pub max_augmentations: Option<usize>,
}

impl SolveOptions {
    /// Run until no augmenting path remains (the default).
    pub fn exact() -> Self {
        Self {
            max_augmentations: None,
        }
    }

    /// Stop after at most `limit` augmentations.
    pub fn capped(limit: usize) -> Self {
        Self {
            max_augmentations: Some(limit),
        }
    }
}
