//! Shortest augmenting path search.
//!
//! Breadth-first over the residual graph: every edge (forward or residual) with positive residual
//! capacity is traversable, each vertex is visited at most once, and the search stops as soon as
//! the sink is dequeued. Paths found this way have the fewest edges, which is what bounds
//! Edmonds–Karp to O(V·E) augmentations.

use crate::network::{Capacity, EdgeKind, FlowNetwork, VertexKey};
use std::collections::VecDeque;

/// A source-to-sink path, as edge indices in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    edges: Vec<usize>,
}

impl AugmentingPath {
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertex keys along the path, source first.
    pub fn vertices<'a, K: VertexKey>(&self, network: &'a FlowNetwork<K>) -> Vec<&'a K> {
        let mut out: Vec<&K> = Vec::with_capacity(self.edges.len() + 1);
        out.push(network.source());
        out.extend(
            self.edges
                .iter()
                .filter_map(|&e| network.vertex_key(network.head(e))),
        );
        out
    }
}

/// Finds one shortest augmenting path, or `None` if the sink is unreachable.
pub fn shortest_augmenting_path<K: VertexKey>(network: &FlowNetwork<K>) -> Option<AugmentingPath> {
    Search::default().find(network)
}

/// Search state kept across rounds so the buffers are allocated once per solve.
#[derive(Debug, Clone, Default)]
pub(crate) struct Search {
    /// Vertex index -> edge it was first reached through.
    parent_edge: Vec<Option<usize>>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl Search {
    pub(crate) fn find<K: VertexKey>(&mut self, network: &FlowNetwork<K>) -> Option<AugmentingPath> {
        let n = network.vertex_count();
        self.parent_edge.clear();
        self.parent_edge.resize(n, None);
        self.visited.clear();
        self.visited.resize(n, false);
        self.queue.clear();

        let source = network.source_ix();
        let sink = network.sink_ix();
        self.visited[source] = true;
        self.queue.push_back(source);

        let mut reached = false;
        while let Some(v) = self.queue.pop_front() {
            if v == sink {
                reached = true;
                break;
            }
            for &e in network.out_edges(v) {
                let w = network.head(e);
                if self.visited[w] || !network.residual(e).is_positive() {
                    continue;
                }
                self.visited[w] = true;
                self.parent_edge[w] = Some(e);
                self.queue.push_back(w);
            }
        }
        if !reached {
            return None;
        }

        let mut edges: Vec<usize> = Vec::new();
        let mut v = sink;
        while v != source {
            let e = self.parent_edge[v]?;
            edges.push(e);
            v = network.tail(e);
        }
        edges.reverse();
        Some(AugmentingPath { edges })
    }
}

/// Marks every vertex reachable from the source over edges accepted by `usable`.
fn reach<K: VertexKey>(network: &FlowNetwork<K>, usable: impl Fn(usize) -> bool) -> Vec<bool> {
    let mut seen = vec![false; network.vertex_count()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    seen[network.source_ix()] = true;
    queue.push_back(network.source_ix());
    while let Some(v) = queue.pop_front() {
        for &e in network.out_edges(v) {
            let w = network.head(e);
            if !seen[w] && usable(e) {
                seen[w] = true;
                queue.push_back(w);
            }
        }
    }
    seen
}

/// Vertices reachable from the source in the current residual graph, by vertex index.
pub fn residual_reachable<K: VertexKey>(network: &FlowNetwork<K>) -> Vec<bool> {
    reach(network, |e| network.residual(e).is_positive())
}

/// Whether source and sink are joined by unbounded forward edges alone.
pub fn unbounded_path_exists<K: VertexKey>(network: &FlowNetwork<K>) -> bool {
    let reachable = reach(network, |e| {
        network.kind(e) == EdgeKind::Forward
            && network.edge(e).is_some_and(|edge| edge.capacity == Capacity::Unbounded)
    });
    reachable[network.sink_ix()]
}
