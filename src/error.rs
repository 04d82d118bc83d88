use thiserror::Error;

/// Why a graph cannot be decomposed into triconnected components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    #[error("graph has {0} nodes, at least 2 are needed")]
    TooSmall(usize),
    #[error("root {root} is out of range for a graph with {node_count} nodes")]
    RootOutOfRange { root: usize, node_count: usize },
    #[error("self-loop at node {0}")]
    SelfLoop(usize),
    #[error("parallel edges between nodes {0} and {1}")]
    ParallelEdge(usize, usize),
    #[error("graph is not connected, node {0} is unreachable")]
    Disconnected(usize),
    #[error("graph is not biconnected, node {0} is an articulation point")]
    ArticulationPoint(usize),
}

/// Problems with an edge list read by [`crate::input`].
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected 'u,v', got '{text}'")]
    Format { line: usize, text: String },
    #[error("line {line}: '{text}' is not a node index")]
    NodeIndex { line: usize, text: String },
    /// Nodes are numbered from 0 without gaps, so `e` edges touch at most `2e` of them.
    #[error("line {line}: node {index} is out of range, the edges touch at most {limit} nodes")]
    NodeOutOfRange {
        line: usize,
        index: usize,
        limit: usize,
    },
}
