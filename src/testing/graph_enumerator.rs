use petgraph::visit::NodeIndexable;

use crate::{EdgeLabel, UnGraph};

/// Enumerates every simple graph on the nodes `0..n`, one per subset of the possible edges.
///
/// `mask` is the subset of the next graph, enumeration stops at `last_mask`.
pub struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    /// All `2^(n(n-1)/2)` graphs on `n` nodes.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * (n - 1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = UnGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = UnGraph::new_undirected();
        for i in 0..self.n {
            graph.add_node(i as u32);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(graph.from_index(i), graph.from_index(j), EdgeLabel::Real);
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_graphs_on_three_nodes() {
        let graphs: Vec<UnGraph> = GraphEnumeratorState::new(3).collect();
        assert_eq!(graphs.len(), 8);

        let mut sizes: Vec<usize> = graphs.iter().map(|g| g.edge_count()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![0, 1, 1, 1, 2, 2, 2, 3]);
    }
}
