//! Minimum cut read off the final residual graph.
//!
//! Once no augmenting path remains, the vertices still reachable from the source form the source
//! side of a minimum cut. Every forward edge leaving that side is saturated, so the cut's capacity
//! equals the flow value.

use crate::network::{Capacity, FlowNetwork, VertexKey};
use crate::search::residual_reachable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutEdge<K> {
    pub from: K,
    pub to: K,
    pub capacity: Capacity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut<K> {
    /// Vertices reachable from the source, in vertex order.
    pub source_side: Vec<K>,
    pub sink_side: Vec<K>,
    /// Forward edges running from the source side to the sink side.
    pub edges: Vec<CutEdge<K>>,
    pub capacity: Capacity,
}

impl<K: VertexKey> MinCut<K> {
    pub fn on_source_side(&self, key: &K) -> bool {
        self.source_side.contains(key)
    }
}

/// Partitions `network` by residual reachability from its source.
///
/// Only a minimum cut when `network` carries a maximum flow.
pub fn min_cut<K: VertexKey>(network: &FlowNetwork<K>) -> MinCut<K> {
    let reachable = residual_reachable(network);

    let mut source_side: Vec<K> = Vec::new();
    let mut sink_side: Vec<K> = Vec::new();
    for (ix, key) in network.vertices().enumerate() {
        if reachable[ix] {
            source_side.push(key.clone());
        } else {
            sink_side.push(key.clone());
        }
    }

    let edges: Vec<CutEdge<K>> = network
        .edges()
        .filter(|e| reachable[network.tail(e.index)] && !reachable[network.head(e.index)])
        .map(|e| CutEdge {
            from: e.from.clone(),
            to: e.to.clone(),
            capacity: e.capacity,
        })
        .collect();
    let capacity = edges.iter().map(|e| e.capacity).sum();

    MinCut {
        source_side,
        sink_side,
        edges,
        capacity,
    }
}
