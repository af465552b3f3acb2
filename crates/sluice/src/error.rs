pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] sluice_network::Error),

    #[error("source and sink are joined by unbounded edges alone; the maximum flow is infinite")]
    UnboundedFlow,
}
