use crate::triconnected_blocks::outside_structures::TriconnectedComponents;

/// Represents the SPQR tree structure built from triconnected components.
///
/// - Vertices are numbered from `0` to `k-1`, where `k` is the number of triconnected components.
/// - `adj[u]` contains the indices of components adjacent to component `u` in the SPQR tree.
///   Two components are adjacent when they share a virtual edge.
#[derive(Debug, Clone)]
pub struct SPQRTree {
    pub triconnected_components: TriconnectedComponents,
    pub adj: Vec<Vec<usize>>,
}

impl SPQRTree {
    pub fn new(triconnected_components: TriconnectedComponents) -> Self {
        let n = triconnected_components.components.len();
        SPQRTree {
            triconnected_components,
            adj: vec![Vec::new(); n],
        }
    }

    pub(crate) fn add_edge(&mut self, u: usize, v: usize) {
        self.adj[u].push(v);
        self.adj[v].push(u);
    }

    /// Number of tree nodes, one per triconnected component.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of tree edges, one per virtual edge.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
}
