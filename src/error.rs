use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartitionError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not find number of nodes in file")]
    MissingVertexCount,

    #[error("Invalid number of nodes: {0:?}")]
    InvalidVertexCount(String),

    #[error("Graph has no vertices to bisect")]
    EmptyGraph,

    #[error("Graph has {0} vertices, a bisection needs an even count")]
    OddVertexCount(usize),

    #[error("Invalid starting partition: {0}")]
    InvalidPartition(String),

    #[error("Cutset mismatch: tracked {expected}, recomputed {actual}")]
    CutsetMismatch { expected: u64, actual: u64 },
}

pub type PartitionResult<T> = Result<T, PartitionError>;
