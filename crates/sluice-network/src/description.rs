//! Adjacency descriptions of a network.
//!
//! A description maps each vertex to its ordered `(neighbor, capacity)` list. It is the shape
//! literal networks are usually written in, and it round-trips through JSON as
//! `{"source": [["a", 3], ["b", null]], "a": [["sink", 2]], "sink": []}` (`null` is unbounded).

use crate::error::{Error, Result};
use crate::network::{Capacity, FlowNetwork, VertexKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Vertex name treated as the source by [`NetworkDescription::build`].
pub const SOURCE: &str = "source";
/// Vertex name treated as the sink by [`NetworkDescription::build`].
pub const SINK: &str = "sink";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash",
    deserialize = "K: Deserialize<'de> + Eq + Hash"
))]
pub struct NetworkDescription<K: Eq + Hash = String> {
    adjacency: IndexMap<K, Vec<(K, Capacity)>>,
}

impl<K: Eq + Hash> Default for NetworkDescription<K> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<K: VertexKey> NetworkDescription<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `vertex` (with no outgoing edges) if it has no entry yet.
    pub fn vertex(&mut self, vertex: impl Into<K>) -> &mut Self {
        self.adjacency.entry(vertex.into()).or_default();
        self
    }

    /// Appends `to` with `capacity` to the neighbor list of `from`.
    pub fn edge(
        &mut self,
        from: impl Into<K>,
        to: impl Into<K>,
        capacity: impl Into<Capacity>,
    ) -> &mut Self {
        self.adjacency
            .entry(from.into())
            .or_default()
            .push((to.into(), capacity.into()));
        self
    }

    pub fn contains(&self, vertex: &K) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn neighbors(&self, vertex: &K) -> Option<&[(K, Capacity)]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[(K, Capacity)])> {
        self.adjacency.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Builds a fresh network with the given terminals.
    ///
    /// Both terminals must have an entry of their own (the sink's list may be empty). Vertices
    /// that only appear as neighbors are created implicitly.
    pub fn to_network(&self, source: K, sink: K) -> Result<FlowNetwork<K>> {
        for terminal in [&source, &sink] {
            if !self.adjacency.contains_key(terminal) {
                return Err(Error::MissingTerminal {
                    terminal: format!("{terminal:?}"),
                });
            }
        }

        let mut network = FlowNetwork::new(source, sink)?;
        for (from, neighbors) in &self.adjacency {
            network.add_vertex(from.clone());
            for (to, capacity) in neighbors {
                network.add_edge(from.clone(), to.clone(), *capacity)?;
            }
        }
        Ok(network)
    }
}

impl NetworkDescription<String> {
    /// Builds a network whose terminals are the vertices named [`SOURCE`] and [`SINK`].
    pub fn build(&self) -> Result<FlowNetwork<String>> {
        self.to_network(SOURCE.to_string(), SINK.to_string())
    }
}

impl<K: VertexKey> FromIterator<(K, Vec<(K, Capacity)>)> for NetworkDescription<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<(K, Capacity)>)>>(iter: I) -> Self {
        let mut description = Self::new();
        for (from, neighbors) in iter {
            description
                .adjacency
                .entry(from)
                .or_default()
                .extend(neighbors);
        }
        description
    }
}
