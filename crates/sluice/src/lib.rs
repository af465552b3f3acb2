#![forbid(unsafe_code)]

//! Maximum flow by shortest augmenting paths (Edmonds–Karp).
//!
//! Build a [`FlowNetwork`](network::FlowNetwork) (or a
//! [`NetworkDescription`](network::NetworkDescription)), hand it to [`solve`], and read the value,
//! the per-edge flows, and a certifying minimum cut off the returned [`MaxFlow`].
//!
//! Each solve owns its network; independent solves share nothing and may run on separate threads.

pub use sluice_network as network;

pub mod augment;
pub mod cut;
pub mod error;
pub mod observer;
pub mod options;
pub mod search;
pub mod solver;

pub use cut::{CutEdge, MinCut};
pub use error::{Error, Result};
pub use observer::{FlowObserver, NoopObserver, TracingObserver};
pub use options::SolveOptions;
pub use search::AugmentingPath;
pub use solver::{EdmondsKarp, MaxFlow, SolverState};

use network::{FlowNetwork, NetworkDescription, VertexKey};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum flow from the vertex named `"source"` to the vertex named `"sink"`.
pub fn max_flow(description: &NetworkDescription) -> Result<i64> {
    Ok(solve(description.build()?)?.value())
}

/// Solves `network` to optimality without observing it.
pub fn solve<K: VertexKey>(network: FlowNetwork<K>) -> Result<MaxFlow<K>> {
    solve_with(network, &SolveOptions::default(), &mut NoopObserver)
}

pub fn solve_with<K, O>(
    network: FlowNetwork<K>,
    options: &SolveOptions,
    observer: &mut O,
) -> Result<MaxFlow<K>>
where
    K: VertexKey,
    O: FlowObserver<K> + ?Sized,
{
    EdmondsKarp::new(network)?.run(options, observer)
}
