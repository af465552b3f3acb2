pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge {from} -> {to} has negative capacity {capacity}")]
    NegativeCapacity {
        from: String,
        to: String,
        capacity: i64,
    },

    #[error("network description has no {terminal} vertex")]
    MissingTerminal { terminal: String },

    #[error("source and sink must be distinct vertices (both are {vertex})")]
    SameTerminals { vertex: String },

    #[error("finite capacities of the network sum past i64::MAX")]
    CapacityOverflow,

    #[error("flow {flow} on edge {from} -> {to} is outside [0, {capacity}]")]
    FlowOutOfBounds {
        from: String,
        to: String,
        flow: i64,
        capacity: String,
    },

    #[error("edge index {index} is out of range")]
    UnknownEdge { index: usize },

    #[error("edge index {index} is a residual edge; flow is set through its forward partner")]
    ResidualEdge { index: usize },
}
