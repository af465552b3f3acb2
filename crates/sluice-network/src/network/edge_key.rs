//! Edge key types.
//!
//! Edges are identified by the ordered pair of their endpoint indices. Parallel edges share a
//! key, so the key maps to every edge index recorded for that direction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub tail: usize,
    pub head: usize,
}

impl EdgeKey {
    pub fn new(tail: usize, head: usize) -> Self {
        Self { tail, head }
    }

    pub fn reversed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
        }
    }
}
