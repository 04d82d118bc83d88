use crate::{
    UnGraph,
    error::DecompositionError,
    spqr_blocks::outside_structures::SPQRTree,
    triconnected::{get_triconnected_components, try_get_triconnected_components},
    triconnected_blocks::outside_structures::TriconnectedComponents,
    types::TriconnectivityConfig,
};

/// Links the components holding each virtual edge.
fn link_components(triconnected_components: TriconnectedComponents) -> SPQRTree {
    let mut holder = vec![None; triconnected_components.edges.len()];
    let mut links = Vec::new();
    for (i, component) in triconnected_components.components.iter().enumerate() {
        for &eid in &component.edges {
            if triconnected_components.is_real_edge[eid] {
                continue;
            }
            match holder[eid] {
                None => holder[eid] = Some(i),
                Some(other) => links.push((other, i)),
            }
        }
    }

    let mut spqr_tree = SPQRTree::new(triconnected_components);
    for (u, v) in links {
        spqr_tree.add_edge(u, v);
    }

    spqr_tree
}

/// Builds the SPQR tree of a biconnected, simple graph.
///
/// See [`get_triconnected_components`] for the requirements on the input.
pub fn get_spqr_tree(graph: &UnGraph) -> SPQRTree {
    link_components(get_triconnected_components(graph))
}

/// Checks the input first, see [`try_get_triconnected_components`].
pub fn try_get_spqr_tree(
    graph: &UnGraph,
    config: &TriconnectivityConfig,
) -> Result<SPQRTree, DecompositionError> {
    try_get_triconnected_components(graph, config).map(link_components)
}

#[cfg(test)]
mod tests {
    use std::mem;

    use petgraph::visit::{EdgeRef, IntoNodeReferences};

    use crate::testing::{
        graph_enumerator::GraphEnumeratorState,
        random_graphs::{random_biconnected_graph, random_ear_graph},
    };

    use super::*;

    fn same_graphs(og_graph: &UnGraph, spqr_tree: &SPQRTree) -> bool {
        let mut edge_counts = vec![0; spqr_tree.triconnected_components.edges.len()];

        let mut vis = vec![false; spqr_tree.triconnected_components.components.len()];
        let mut stack = vec![0];
        vis[0] = true;
        while let Some(component_id) = stack.pop() {
            for &eid in &spqr_tree.triconnected_components.components[component_id].edges {
                edge_counts[eid] += 1;
            }

            for &neigh in &spqr_tree.adj[component_id] {
                if !vis[neigh] {
                    vis[neigh] = true;
                    stack.push(neigh);
                }
            }
        }
        assert!(vis.iter().all(|&x| x));

        // a tree: connected with one edge less than nodes
        assert_eq!(spqr_tree.edge_count() + 1, spqr_tree.node_count());

        let mut spq_edges = vec![];
        for (eid, count) in edge_counts.iter().enumerate() {
            if *count == 1 {
                let (mut u, mut v) = spqr_tree.triconnected_components.edges[eid];
                if u > v {
                    mem::swap(&mut u, &mut v);
                }
                spq_edges.push((u, v));
            } else {
                assert_eq!(*count, 2); // a virtual edge
                assert!(!spqr_tree.triconnected_components.is_real_edge[eid]);
            }
        }
        spq_edges.sort();

        let mut edges_in = vec![];
        for edge in og_graph.edge_references() {
            let mut u = edge.source().index();
            let mut v = edge.target().index();
            if u > v {
                mem::swap(&mut u, &mut v);
            }
            edges_in.push((u, v));
        }
        edges_in.sort();

        assert_eq!(og_graph.node_references().count(), {
            let mut nodes: Vec<usize> = spq_edges.iter().flat_map(|&(u, v)| [u, v]).collect();
            nodes.sort();
            nodes.dedup();
            nodes.len()
        });

        spq_edges == edges_in
    }

    #[cfg(all(test, not(debug_assertions)))]
    #[test]
    fn test_spqr_tree() {
        for i in 0..1000 {
            let n = 2 + i / 10;
            let m: usize = 1 + i;

            let in_graph = random_biconnected_graph(n, m, i);
            let spqr_tree = get_spqr_tree(&in_graph);
            assert!(same_graphs(&in_graph, &spqr_tree));
        }
    }

    #[test]
    fn test_spqr_tree_light() {
        for i in 0..100 {
            let n = 2 + i / 10;
            let m: usize = 1 + i / 2;

            let in_graph = random_biconnected_graph(n, m, i);
            let spqr_tree = get_spqr_tree(&in_graph);
            assert!(same_graphs(&in_graph, &spqr_tree));
        }
    }

    #[test]
    fn test_spqr_tree_of_ear_graphs() {
        for i in 0..100 {
            let n = 3 + i / 8;
            let in_graph = random_ear_graph(n, n + i % 4, 1 + i % 3, 3000 + i);

            for root in 0..n {
                let config = TriconnectivityConfig::with_root(root);
                let spqr_tree = try_get_spqr_tree(&in_graph, &config).unwrap();
                assert!(same_graphs(&in_graph, &spqr_tree), "graph {i}, root {root}");
            }
        }
    }

    #[test]
    fn test_spqr_tree_exhaustive() {
        #[cfg(debug_assertions)]
        let max_n = 5;
        #[cfg(not(debug_assertions))]
        let max_n = 7;

        for n in 2..=max_n {
            for in_graph in GraphEnumeratorState::new(n) {
                for root in 0..n {
                    let config = TriconnectivityConfig::with_root(root);
                    let Ok(spqr_tree) = try_get_spqr_tree(&in_graph, &config) else {
                        break; // not biconnected
                    };
                    assert!(same_graphs(&in_graph, &spqr_tree), "root {root}");
                }
            }
        }
    }

    #[test]
    fn test_bond_in_the_middle() {
        // two squares sharing the edge 1 - 4
        let mut in_graph = UnGraph::new_undirected();
        let nodes: Vec<_> = (0..6).map(|i| in_graph.add_node(i)).collect();
        for (s, t) in [(0, 1), (1, 2), (3, 4), (4, 5), (0, 3), (1, 4), (2, 5)] {
            in_graph.add_edge(nodes[s], nodes[t], crate::EdgeLabel::Real);
        }

        let spqr_tree = get_spqr_tree(&in_graph);
        assert_eq!(spqr_tree.node_count(), 3);

        let bond = spqr_tree.triconnected_components.real_to_split[5].unwrap();
        assert_eq!(spqr_tree.adj[bond].len(), 2);
        assert!(same_graphs(&in_graph, &spqr_tree));
    }
}
