/// Enum representing the type of edge in a graph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EdgeLabel {
    Real,
    Virtual,
}

impl std::fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeLabel::Real => write!(f, "Real"),
            EdgeLabel::Virtual => write!(f, "Virtual"),
        }
    }
}

/// Wrapper for petgraph's graph type.
///
/// Node weights are free for the user; edges are expected to be [`EdgeLabel::Real`].
pub type UnGraph = petgraph::graph::UnGraph<u32, EdgeLabel>;

/// Knobs of the triconnected decomposition.
///
/// - `root`: index of the node the depth-first searches start from.
///   Any node gives the same components, only their order and the ids of virtual edges differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriconnectivityConfig {
    pub root: usize,
}

impl TriconnectivityConfig {
    pub fn with_root(root: usize) -> Self {
        Self { root }
    }
}
