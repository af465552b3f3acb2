//! Flow network container.
//!
//! Forward edges are supplied by the caller through [`FlowNetwork::add_edge`]. Residual edges are
//! never supplied: [`FlowNetwork::ensure_reverse`] creates the partner of a forward edge the first
//! time it is needed, and [`FlowNetwork::add_flow`] keeps the pair in lock-step. A residual edge's
//! capacity always equals the forward flow it can cancel, and its own flow stays 0.

mod capacity;
mod edge_key;
mod entries;

pub use capacity::Capacity;
pub use edge_key::EdgeKey;

use crate::error::{Error, Result};
use entries::{EdgeEntry, VertexEntry};
use rustc_hash::FxBuildHasher;
use std::fmt::Debug;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Keys usable as vertex identities.
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexKey for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Supplied by the caller; `0 <= flow <= capacity`.
    Forward,
    /// Synthesized partner of a forward edge; capacity tracks the partner's flow.
    Residual,
}

/// Borrowed view of one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a, K> {
    pub index: usize,
    pub from: &'a K,
    pub to: &'a K,
    pub kind: EdgeKind,
    pub capacity: Capacity,
    pub flow: i64,
}

impl<K> EdgeRef<'_, K> {
    pub fn residual(&self) -> Capacity {
        self.capacity.remaining_after(self.flow)
    }
}

#[derive(Debug, Clone)]
pub struct FlowNetwork<K> {
    vertices: Vec<VertexEntry<K>>,
    vertex_index: HashMap<K, usize>,

    edges: Vec<EdgeEntry>,
    edge_index: HashMap<EdgeKey, Vec<usize>>,
    forward_count: usize,

    source: usize,
    sink: usize,

    // Running sum of finite capacities. Every flow value is bounded by it, so keeping it within
    // i64 rules out overflow in the solver.
    finite_total: i128,
}

impl<K: VertexKey> FlowNetwork<K> {
    pub fn new(source: K, sink: K) -> Result<Self> {
        if source == sink {
            return Err(Error::SameTerminals {
                vertex: format!("{source:?}"),
            });
        }
        let mut network = Self {
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            forward_count: 0,
            source: 0,
            sink: 0,
            finite_total: 0,
        };
        network.source = network.add_vertex(source);
        network.sink = network.add_vertex(sink);
        Ok(network)
    }

    /// Interns `key`, returning its vertex index. Existing vertices are left untouched.
    pub fn add_vertex(&mut self, key: K) -> usize {
        if let Some(&ix) = self.vertex_index.get(&key) {
            return ix;
        }
        let ix = self.vertices.len();
        self.vertices.push(VertexEntry {
            key: key.clone(),
            out: Vec::new(),
        });
        self.vertex_index.insert(key, ix);
        ix
    }

    /// Adds a forward edge with zero flow and returns its index.
    ///
    /// Both endpoints are created if absent. Repeating a `(from, to)` pair adds a parallel edge.
    pub fn add_edge(&mut self, from: K, to: K, capacity: Capacity) -> Result<usize> {
        if let Capacity::Finite(c) = capacity {
            if c < 0 {
                return Err(Error::NegativeCapacity {
                    from: format!("{from:?}"),
                    to: format!("{to:?}"),
                    capacity: c,
                });
            }
            let total = self.finite_total + i128::from(c);
            if total > i128::from(i64::MAX) {
                return Err(Error::CapacityOverflow);
            }
            self.finite_total = total;
        }

        let tail = self.add_vertex(from);
        let head = self.add_vertex(to);
        self.forward_count += 1;
        Ok(self.push_edge(EdgeKey::new(tail, head), EdgeKind::Forward, capacity, None))
    }

    fn push_edge(
        &mut self,
        key: EdgeKey,
        kind: EdgeKind,
        capacity: Capacity,
        partner: Option<usize>,
    ) -> usize {
        let ix = self.edges.len();
        self.edges.push(EdgeEntry {
            key,
            kind,
            capacity,
            flow: 0,
            partner,
        });
        self.vertices[key.tail].out.push(ix);
        self.edge_index.entry(key).or_default().push(ix);
        ix
    }

    pub fn source(&self) -> &K {
        &self.vertices[self.source].key
    }

    pub fn sink(&self) -> &K {
        &self.vertices[self.sink].key
    }

    pub fn source_ix(&self) -> usize {
        self.source
    }

    pub fn sink_ix(&self) -> usize {
        self.sink
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of caller-supplied edges.
    pub fn edge_count(&self) -> usize {
        self.forward_count
    }

    /// Number of residual edges synthesized so far.
    pub fn residual_edge_count(&self) -> usize {
        self.edges.len() - self.forward_count
    }

    pub fn has_vertex(&self, key: &K) -> bool {
        self.vertex_index.contains_key(key)
    }

    pub fn vertex_ix(&self, key: &K) -> Option<usize> {
        self.vertex_index.get(key).copied()
    }

    pub fn vertex_key(&self, ix: usize) -> Option<&K> {
        self.vertices.get(ix).map(|v| &v.key)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.vertices.iter().map(|v| &v.key)
    }

    pub fn edge(&self, ix: usize) -> Option<EdgeRef<'_, K>> {
        let edge = self.edges.get(ix)?;
        Some(EdgeRef {
            index: ix,
            from: &self.vertices[edge.key.tail].key,
            to: &self.vertices[edge.key.head].key,
            kind: edge.kind,
            capacity: edge.capacity,
            flow: edge.flow,
        })
    }

    /// Caller-supplied edges with their current flow, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, K>> {
        self.all_edges().filter(|e| e.kind == EdgeKind::Forward)
    }

    /// Forward and residual edges, in creation order.
    pub fn all_edges(&self) -> impl Iterator<Item = EdgeRef<'_, K>> {
        (0..self.edges.len()).filter_map(|ix| self.edge(ix))
    }

    /// Every edge (forward or residual) running `from -> to`.
    pub fn edges_between(&self, from: &K, to: &K) -> Vec<EdgeRef<'_, K>> {
        let (Some(tail), Some(head)) = (self.vertex_ix(from), self.vertex_ix(to)) else {
            return Vec::new();
        };
        self.edge_index
            .get(&EdgeKey::new(tail, head))
            .map(|ixs| ixs.iter().filter_map(|&ix| self.edge(ix)).collect())
            .unwrap_or_default()
    }

    /// Outgoing edge indices of vertex `v_ix`, forward and residual.
    ///
    /// Panics if `v_ix` is out of range.
    pub fn out_edges(&self, v_ix: usize) -> &[usize] {
        &self.vertices[v_ix].out
    }

    /// Panics if `e_ix` is out of range.
    pub fn tail(&self, e_ix: usize) -> usize {
        self.edges[e_ix].key.tail
    }

    /// Panics if `e_ix` is out of range.
    pub fn head(&self, e_ix: usize) -> usize {
        self.edges[e_ix].key.head
    }

    /// Panics if `e_ix` is out of range.
    pub fn kind(&self, e_ix: usize) -> EdgeKind {
        self.edges[e_ix].kind
    }

    /// Panics if `e_ix` is out of range.
    pub fn partner(&self, e_ix: usize) -> Option<usize> {
        self.edges[e_ix].partner
    }

    /// Residual capacity of edge `e_ix`.
    ///
    /// Panics if `e_ix` is out of range.
    pub fn residual(&self, e_ix: usize) -> Capacity {
        self.edges[e_ix].residual()
    }

    /// Vertices reachable from `key` over an edge with positive residual capacity.
    ///
    /// Each neighbor appears once, in the order its first usable edge was created.
    pub fn neighbors(&self, key: &K) -> Vec<&K> {
        let Some(v_ix) = self.vertex_ix(key) else {
            return Vec::new();
        };
        let mut seen: HashSet<usize> = HashSet::default();
        let mut out: Vec<&K> = Vec::new();
        for &e_ix in &self.vertices[v_ix].out {
            let edge = &self.edges[e_ix];
            if edge.residual().is_positive() && seen.insert(edge.key.head) {
                out.push(&self.vertices[edge.key.head].key);
            }
        }
        out
    }

    /// Residual capacity of the first traversable edge `from -> to`.
    ///
    /// Forward edges with spare capacity take precedence over residual edges. `None` when no
    /// edge in that direction currently has positive residual capacity.
    pub fn residual_capacity(&self, from: &K, to: &K) -> Option<Capacity> {
        let tail = self.vertex_ix(from)?;
        let head = self.vertex_ix(to)?;
        let ixs = self.edge_index.get(&EdgeKey::new(tail, head))?;
        self.first_usable(ixs, EdgeKind::Forward)
            .or_else(|| self.first_usable(ixs, EdgeKind::Residual))
    }

    fn first_usable(&self, ixs: &[usize], kind: EdgeKind) -> Option<Capacity> {
        ixs.iter()
            .map(|&ix| &self.edges[ix])
            .filter(|e| e.kind == kind)
            .map(EdgeEntry::residual)
            .find(|r| r.is_positive())
    }

    /// Sum of forward capacities leaving `key`.
    pub fn capacity_out_of(&self, key: &K) -> Capacity {
        let Some(v_ix) = self.vertex_ix(key) else {
            return Capacity::ZERO;
        };
        self.vertices[v_ix]
            .out
            .iter()
            .map(|&ix| &self.edges[ix])
            .filter(|e| e.kind == EdgeKind::Forward)
            .map(|e| e.capacity)
            .sum()
    }

    /// Forward flow leaving `key` minus forward flow entering it.
    pub fn net_outflow(&self, key: &K) -> Option<i64> {
        let v_ix = self.vertex_ix(key)?;
        let mut net: i64 = 0;
        for edge in self.edges.iter().filter(|e| e.kind == EdgeKind::Forward) {
            if edge.key.tail == v_ix {
                net += edge.flow;
            }
            if edge.key.head == v_ix {
                net -= edge.flow;
            }
        }
        Some(net)
    }

    /// Returns the partner of edge `e_ix`, creating it if `e_ix` is a forward edge without one.
    ///
    /// The flag reports whether this call created the edge. A new residual edge runs
    /// `head -> tail`, has capacity equal to the forward flow and flow 0, and is appended to the
    /// head vertex's outgoing list so later searches can traverse it.
    pub fn ensure_reverse(&mut self, e_ix: usize) -> Result<(usize, bool)> {
        let edge = self
            .edges
            .get(e_ix)
            .ok_or(Error::UnknownEdge { index: e_ix })?;
        if let Some(partner) = edge.partner {
            return Ok((partner, false));
        }
        let key = edge.key.reversed();
        let capacity = Capacity::Finite(edge.flow);
        let r_ix = self.push_edge(key, EdgeKind::Residual, capacity, Some(e_ix));
        self.edges[e_ix].partner = Some(r_ix);
        Ok((r_ix, true))
    }

    /// Adds `delta` (negative to cancel) to the flow of forward edge `e_ix`.
    ///
    /// The residual partner is created if needed and resized to the new flow. Returns the new
    /// flow. Fails without mutating anything if the result would leave `[0, capacity]`.
    pub fn add_flow(&mut self, e_ix: usize, delta: i64) -> Result<i64> {
        let edge = self
            .edges
            .get(e_ix)
            .ok_or(Error::UnknownEdge { index: e_ix })?;
        if edge.kind != EdgeKind::Forward {
            return Err(Error::ResidualEdge { index: e_ix });
        }
        let flow = edge.flow.checked_add(delta);
        let Some(flow) = flow.filter(|&f| edge.capacity.admits(f)) else {
            return Err(Error::FlowOutOfBounds {
                from: self.describe(edge.key.tail),
                to: self.describe(edge.key.head),
                flow: edge.flow.saturating_add(delta),
                capacity: edge.capacity.to_string(),
            });
        };

        let (r_ix, _) = self.ensure_reverse(e_ix)?;
        self.edges[e_ix].flow = flow;
        let reverse = &mut self.edges[r_ix];
        reverse.capacity = Capacity::Finite(flow);
        reverse.flow = 0;
        Ok(flow)
    }

    fn describe(&self, v_ix: usize) -> String {
        format!("{:?}", self.vertices[v_ix].key)
    }
}
