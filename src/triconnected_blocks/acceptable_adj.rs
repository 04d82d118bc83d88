use radsort::sort_by_key;

use crate::triconnected_blocks::{decorations::EdgeKind, graph_internal::GraphInternal};

/// Reorders every incidence list so that the path search finds the paths in the right order.
///
/// Each edge `u -> to` gets the key
/// - `3 * lowpt1[to]` for a tree arc with `lowpt2[to] < num[u]`,
/// - `3 * lowpt1[to] + 2` for any other tree arc,
/// - `3 * num[to] + 1` for a frond,
///
/// and is listed at its source in increasing key order. Targets no longer list their edges.
pub(crate) fn make_adjacency_lists_acceptable(graph: &mut GraphInternal) {
    let mut order = Vec::with_capacity(graph.edges.len());

    for eid in 0..graph.edges.len() {
        let edge = &graph.edges[eid];
        if !edge.alive {
            continue;
        }
        let (u, to) = (edge.source, edge.target);

        let phi = match edge.deco.kind {
            EdgeKind::TreeArc => {
                let child = &graph.nodes[to].deco;
                if child.lowpt2 < graph.num(u) {
                    3 * child.lowpt1
                } else {
                    3 * child.lowpt1 + 2
                }
            }
            EdgeKind::Frond => 3 * graph.num(to) + 1,
            EdgeKind::Unclassified => unreachable!("edge {eid} was not reached by the palm tree"),
        };

        graph.edges[eid].deco.phi = phi;
        order.push(eid);
    }

    sort_by_key(&mut order, |&eid| graph.edges[eid].deco.phi);

    for eid in order {
        let u = graph.edges[eid].source;
        graph.nodes[u].deco.ordered_adjacency.push(eid);
    }

    graph.commit_ordered_adjacency();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        EdgeLabel, UnGraph,
        triconnected_blocks::{graph_internal::EdgeId, palm_dfs::run_palm_dfs},
    };
    use petgraph::visit::NodeIndexable;

    #[test]
    fn test_fronds_and_arcs_are_ordered() {
        // 0 - 1 - 2 - 3 - 0 with chord 1 - 3
        let mut g = UnGraph::new_undirected();
        for i in 0..4 {
            g.add_node(i);
        }
        for (s, t) in [(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)] {
            g.add_edge(g.from_index(s), g.from_index(t), EdgeLabel::Real);
        }
        let mut graph = GraphInternal::from_petgraph(&g);
        run_palm_dfs(&mut graph, 0);
        make_adjacency_lists_acceptable(&mut graph);

        let listed = |u: usize| -> Vec<EdgeId> {
            graph.entries(u).map(|a| graph.entry_edge(a)).collect()
        };

        // 3 has fronds to 0 (key 4) and to 1 (key 7)
        assert_eq!(listed(3), vec![3, 4]);
        assert_eq!(graph.edges[3].deco.phi, 4);
        assert_eq!(graph.edges[4].deco.phi, 7);
        assert_eq!(listed(0), vec![0]);
        assert_eq!(listed(1), vec![1]);
        assert_eq!(listed(2), vec![2]);

        for u in 0..4 {
            let phis: Vec<usize> = listed(u)
                .into_iter()
                .map(|eid| graph.edges[eid].deco.phi)
                .collect();
            assert!(phis.is_sorted());
            assert!(graph.nodes[u].deco.ordered_adjacency.is_empty());
        }
    }
}
