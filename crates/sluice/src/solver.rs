//! Edmonds–Karp driving loop.
//!
//! The solver is a two-state machine. While [`SolverState::Running`], each [`EdmondsKarp::step`]
//! searches for a shortest augmenting path, pushes its bottleneck along it, and adds the
//! bottleneck to the running total. The first search that finds no path moves it to
//! [`SolverState::Done`].

use crate::augment;
use crate::cut::{self, MinCut};
use crate::error::{Error, Result};
use crate::network::{Capacity, EdgeKind, FlowNetwork, VertexKey};
use crate::observer::FlowObserver;
use crate::options::SolveOptions;
use crate::search::{self, Search};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Running,
    Done,
}

#[derive(Debug, Clone)]
pub struct EdmondsKarp<K> {
    network: FlowNetwork<K>,
    state: SolverState,
    value: i64,
    augmentations: usize,
    search: Search,
}

impl<K: VertexKey> EdmondsKarp<K> {
    /// Takes ownership of `network` with all flows as constructed.
    ///
    /// Fails with [`Error::UnboundedFlow`] if source and sink are joined by unbounded edges
    /// alone, since no finite maximum exists.
    pub fn new(network: FlowNetwork<K>) -> Result<Self> {
        if search::unbounded_path_exists(&network) {
            return Err(Error::UnboundedFlow);
        }
        Ok(Self {
            network,
            state: SolverState::Running,
            value: 0,
            augmentations: 0,
            search: Search::default(),
        })
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Flow pushed so far.
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    pub fn network(&self) -> &FlowNetwork<K> {
        &self.network
    }

    /// Runs one search-and-augment round.
    ///
    /// Returns the amount pushed, or `None` once no augmenting path remains.
    pub fn step<O>(&mut self, observer: &mut O) -> Result<Option<i64>>
    where
        O: FlowObserver<K> + ?Sized,
    {
        if self.state == SolverState::Done {
            return Ok(None);
        }
        let Some(path) = self.search.find(&self.network) else {
            self.state = SolverState::Done;
            return Ok(None);
        };
        observer.on_path_found(&path.vertices(&self.network));

        let Capacity::Finite(bottleneck) = augment::bottleneck(&self.network, &path) else {
            return Err(Error::UnboundedFlow);
        };
        augment::augment(&mut self.network, &path, bottleneck, observer)?;
        self.value += bottleneck;
        self.augmentations += 1;

        tracing::trace!(
            bottleneck,
            total = self.value,
            path_len = path.len(),
            "augmenting path applied"
        );
        observer.on_augment(bottleneck, self.value);
        Ok(Some(bottleneck))
    }

    /// Steps until done (or until the augmentation cap in `options` is hit).
    pub fn run<O>(mut self, options: &SolveOptions, observer: &mut O) -> Result<MaxFlow<K>>
    where
        O: FlowObserver<K> + ?Sized,
    {
        let span = tracing::debug_span!(
            "edmonds_karp",
            vertices = self.network.vertex_count(),
            edges = self.network.edge_count()
        );
        let _enter = span.enter();

        while self.state == SolverState::Running {
            if options
                .max_augmentations
                .is_some_and(|cap| self.augmentations >= cap)
            {
                // A capped solve may still have reached the maximum.
                if self.search.find(&self.network).is_none() {
                    self.state = SolverState::Done;
                }
                break;
            }
            self.step(observer)?;
        }

        let complete = self.state == SolverState::Done;
        observer.on_complete(self.value, self.augmentations);
        tracing::debug!(
            value = self.value,
            augmentations = self.augmentations,
            residual_edges = self.network.residual_edge_count(),
            complete,
            "max flow solve finished"
        );

        Ok(MaxFlow {
            value: self.value,
            augmentations: self.augmentations,
            complete,
            network: self.network,
        })
    }
}

/// Result of a solve: the flow value plus the solved network for inspection.
#[derive(Debug, Clone)]
pub struct MaxFlow<K> {
    value: i64,
    augmentations: usize,
    complete: bool,
    network: FlowNetwork<K>,
}

impl<K: VertexKey> MaxFlow<K> {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Whether the solver proved the value maximal (always true without an augmentation cap).
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn network(&self) -> &FlowNetwork<K> {
        &self.network
    }

    pub fn into_network(self) -> FlowNetwork<K> {
        self.network
    }

    /// Total flow over the caller-supplied edges `from -> to`.
    pub fn flow_between(&self, from: &K, to: &K) -> i64 {
        self.network
            .edges_between(from, to)
            .iter()
            .filter(|e| e.kind == EdgeKind::Forward)
            .map(|e| e.flow)
            .sum()
    }

    /// Minimum cut certified by the final residual graph; `None` for an incomplete solve.
    pub fn min_cut(&self) -> Option<MinCut<K>> {
        self.complete.then(|| cut::min_cut(&self.network))
    }
}
