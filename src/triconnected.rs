use hashbrown::HashSet;
use petgraph::visit::EdgeRef;

use crate::{
    UnGraph,
    error::DecompositionError,
    triconnected_blocks::{
        acceptable_adj::make_adjacency_lists_acceptable,
        graph_internal::GraphInternal,
        outside_structures::TriconnectedComponents,
        palm_dfs::{Separation, find_separation, run_palm_dfs},
        path_search::run_path_search,
        pathfinder::run_pathfinder,
    },
    types::TriconnectivityConfig,
};

/// Runs the passes after the palm tree on a working copy of `in_graph`.
fn decompose(in_graph: &UnGraph, mut graph: GraphInternal, root: usize) -> TriconnectedComponents {
    let edges = in_graph
        .edge_references()
        .map(|e| (e.source().index(), e.target().index()))
        .collect();
    let mut components = TriconnectedComponents::new(edges);

    // order the out-lists by the low points of the palm tree
    make_adjacency_lists_acceptable(&mut graph);
    // renumber the vertices along the paths, collect the high points
    run_pathfinder(&mut graph, root);
    // cut off the split components
    run_path_search(&mut graph, root, &mut components);

    components.finish();
    components
}

/// Computes the triconnected components of a biconnected, simple undirected graph.
///
/// # Overview
///
/// Given a biconnected graph `G`, this function finds its split components and merges them
/// into the triconnected components.
/// The algorithm assumes that the input graph is biconnected, has at least two vertices and contains
/// no self-loops nor multiple edges. Use [`try_get_triconnected_components`] to have it checked.
///
/// ## Split-Pair Definition
/// A pair of vertices `(s, t)` is called a *split-pair* if:
/// - Removing both `s` and `t` disconnects the graph, **or**
/// - There are multiple edges directly connecting `s` and `t`.
///
/// When a split-pair `(s, t)` is found, the graph is split into components by removing `s` and `t`.
/// For each resulting component, a new *virtual* edge `(s, t)` is added to maintain biconnectivity.
/// This allows the components to be merged later by "gluing" them together via the virtual edge.
///
/// ## Component Types
/// After recursively splitting on all split-pairs, the resulting components are of three types:
/// - **P node**: Exactly two vertices and the edges between them.
/// - **S node**: A simple cycle.
/// - **R node**: A triconnected component (cannot be split further).
///
/// After merging all P nodes with P nodes and S nodes with S nodes, the final set of triconnected components is obtained.
/// A graph with a single edge is a single P node.
///
/// ## Output
/// Returns a struct `TriconnectedComponents`. Every virtual edge is in exactly two components.
///
/// ## Reference
/// - [Hopcroft, J., & Tarjan, R. (1973). Dividing a Graph into Triconnected Components. SIAM Journal on Computing, 2(3), 135–158.](https://epubs.siam.org/doi/10.1137/0202012)
/// - [Gutwenger, C., & Mutzel, P. (2001). A Linear Time Implementation of SPQR-Trees.](https://doi.org/10.1007/3-540-44541-2_8)
pub fn get_triconnected_components(in_graph: &UnGraph) -> TriconnectedComponents {
    get_triconnected_components_with(in_graph, &TriconnectivityConfig::default())
}

/// Same as [`get_triconnected_components`], with the depth-first searches started at `config.root`.
pub fn get_triconnected_components_with(
    in_graph: &UnGraph,
    config: &TriconnectivityConfig,
) -> TriconnectedComponents {
    let n = in_graph.node_count();
    assert!(n >= 2);
    assert!(config.root < n);

    let mut graph = GraphInternal::from_petgraph(in_graph);
    // first dfs, computes num, lowpt1, lowpt2, nd, parent_edge and fixes the edges' direction
    run_palm_dfs(&mut graph, config.root);

    decompose(in_graph, graph, config.root)
}

/// Checks that the graph can be decomposed, then does what [`get_triconnected_components_with`] does.
pub fn try_get_triconnected_components(
    in_graph: &UnGraph,
    config: &TriconnectivityConfig,
) -> Result<TriconnectedComponents, DecompositionError> {
    let n = in_graph.node_count();
    if n < 2 {
        return Err(DecompositionError::TooSmall(n));
    }
    if config.root >= n {
        return Err(DecompositionError::RootOutOfRange {
            root: config.root,
            node_count: n,
        });
    }

    let mut seen = HashSet::with_capacity(in_graph.edge_count());
    for e in in_graph.edge_references() {
        let (s, t) = (e.source().index(), e.target().index());
        if s == t {
            return Err(DecompositionError::SelfLoop(s));
        }
        if !seen.insert((s.min(t), s.max(t))) {
            return Err(DecompositionError::ParallelEdge(s.min(t), s.max(t)));
        }
    }

    let mut graph = GraphInternal::from_petgraph(in_graph);
    run_palm_dfs(&mut graph, config.root);
    match find_separation(&graph, config.root) {
        Some(Separation::Unreached(u)) => Err(DecompositionError::Disconnected(u)),
        Some(Separation::ArticulationPoint(u)) => Err(DecompositionError::ArticulationPoint(u)),
        None => Ok(decompose(in_graph, graph, config.root)),
    }
}
