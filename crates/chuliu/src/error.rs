pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] crate::graphlib::Error),

    #[error("root vertex is not part of the graph")]
    RootNotFound,

    /// `count` is taken on the contraction level where the check failed, where a contracted
    /// cycle counts as a single vertex.
    #[error(
        "no spanning arborescence exists: at least one vertex is unreachable from the root ({count} without an incoming edge)"
    )]
    Unreachable { count: usize },

    #[error("edge weights cannot be ordered (NaN?)")]
    IncomparableWeight,

    #[error("reduced edge weight does not fit the weight type")]
    WeightOverflow,

    #[error("cycle contraction exceeded the depth limit of {max}")]
    DepthExceeded { max: usize },

    #[error("contracted arborescence does not enter the contracted cycle")]
    DetachedCycle,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("edge list line {line}: {message}")]
    Parse { line: usize, message: String },
}
