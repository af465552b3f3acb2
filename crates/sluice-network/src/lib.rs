#![forbid(unsafe_code)]

//! Flow network container used by `sluice`.
//!
//! A [`FlowNetwork`] owns a directed multigraph of capacitated forward edges plus the residual
//! (reverse) edges synthesized while flow is pushed. Vertices are interned by key on first use;
//! edges are addressed by index and looked up by an ordered [`EdgeKey`] pair.

pub mod description;
pub mod error;
pub mod network;

pub use description::{NetworkDescription, SINK, SOURCE};
pub use error::{Error, Result};
pub use network::{Capacity, EdgeKey, EdgeKind, EdgeRef, FlowNetwork, VertexKey};
