//! Solver event hooks.
//!
//! The solver reports progress through [`FlowObserver`] rather than logging inline. Every method
//! has a no-op default, so an observer only implements the events it cares about.

use std::fmt::Debug;

pub trait FlowObserver<K> {
    /// A residual edge `from -> to` was synthesized.
    fn on_edge_created(&mut self, _from: &K, _to: &K) {}

    /// An augmenting path was found; `path` lists its vertices from source to sink.
    fn on_path_found(&mut self, _path: &[&K]) {}

    /// `bottleneck` units were pushed along the last path found, bringing the total to `total`.
    fn on_augment(&mut self, _bottleneck: i64, _total: i64) {}

    /// The solver stopped with `value` after `augmentations` rounds.
    fn on_complete(&mut self, _value: i64, _augmentations: usize) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<K> FlowObserver<K> for NoopObserver {}

/// Forwards every event to `tracing`: per-round events at `TRACE`, completion at `DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<K: Debug> FlowObserver<K> for TracingObserver {
    fn on_edge_created(&mut self, from: &K, to: &K) {
        tracing::trace!(?from, ?to, "residual edge created");
    }

    fn on_path_found(&mut self, path: &[&K]) {
        tracing::trace!(?path, "augmenting path found");
    }

    fn on_augment(&mut self, bottleneck: i64, total: i64) {
        tracing::trace!(bottleneck, total, "flow augmented");
    }

    fn on_complete(&mut self, value: i64, augmentations: usize) {
        tracing::debug!(value, augmentations, "max flow complete");
    }
}

impl<K, O: FlowObserver<K> + ?Sized> FlowObserver<K> for &mut O {
    fn on_edge_created(&mut self, from: &K, to: &K) {
        (**self).on_edge_created(from, to);
    }

    fn on_path_found(&mut self, path: &[&K]) {
        (**self).on_path_found(path);
    }

    fn on_augment(&mut self, bottleneck: i64, total: i64) {
        (**self).on_augment(bottleneck, total);
    }

    fn on_complete(&mut self, value: i64, augmentations: usize) {
        (**self).on_complete(value, augmentations);
    }
}
