//! Bottleneck computation and flow correction along an augmenting path.

use crate::error::Result;
use crate::network::{Capacity, EdgeKind, Error as NetworkError, FlowNetwork, VertexKey};
use crate::observer::FlowObserver;
use crate::search::AugmentingPath;

/// Smallest residual capacity on `path`.
///
/// Positive for any path returned by the search. `Unbounded` only if every edge on the path is
/// unbounded, which [`EdmondsKarp::new`](crate::EdmondsKarp::new) rules out up front.
pub fn bottleneck<K: VertexKey>(network: &FlowNetwork<K>, path: &AugmentingPath) -> Capacity {
    path.edges()
        .iter()
        .map(|&e| network.residual(e))
        .min()
        .unwrap_or(Capacity::ZERO)
}

/// Pushes `amount` units along `path`.
///
/// A forward edge gains `amount` units of flow; its residual partner is created on first use
/// (reported through [`FlowObserver::on_edge_created`]) and resized to the new flow. A residual
/// edge cancels `amount` units on its forward partner, shrinking itself to match.
pub fn augment<K, O>(
    network: &mut FlowNetwork<K>,
    path: &AugmentingPath,
    amount: i64,
    observer: &mut O,
) -> Result<()>
where
    K: VertexKey,
    O: FlowObserver<K> + ?Sized,
{
    debug_assert!(amount > 0, "augmenting by a non-positive amount");

    for &e in path.edges() {
        match network.kind(e) {
            EdgeKind::Forward => {
                let (r, created) = network.ensure_reverse(e)?;
                if created {
                    if let Some(edge) = network.edge(r) {
                        observer.on_edge_created(edge.from, edge.to);
                    }
                }
                network.add_flow(e, amount)?;
            }
            EdgeKind::Residual => {
                let forward = network
                    .partner(e)
                    .ok_or(NetworkError::UnknownEdge { index: e })?;
                network.add_flow(forward, -amount)?;
            }
        }
    }
    Ok(())
}
