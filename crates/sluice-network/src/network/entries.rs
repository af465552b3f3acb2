//! Internal storage entries for [`FlowNetwork`](super::FlowNetwork).

use super::{Capacity, EdgeKey, EdgeKind};

#[derive(Debug, Clone)]
pub(in crate::network) struct VertexEntry<K> {
    pub(in crate::network) key: K,
    /// Outgoing edge indices, forward and residual, in creation order.
    pub(in crate::network) out: Vec<usize>,
}

#[derive(Debug, Clone)]
pub(in crate::network) struct EdgeEntry {
    pub(in crate::network) key: EdgeKey,
    pub(in crate::network) kind: EdgeKind,
    pub(in crate::network) capacity: Capacity,
    pub(in crate::network) flow: i64,
    /// The paired edge in the opposite direction, once synthesized.
    pub(in crate::network) partner: Option<usize>,
}

impl EdgeEntry {
    pub(in crate::network) fn residual(&self) -> Capacity {
        self.capacity.remaining_after(self.flow)
    }
}
