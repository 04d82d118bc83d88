use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::{
    UnGraph,
    triconnected_blocks::{
        acceptable_adj::make_adjacency_lists_acceptable,
        decorations::EdgeKind,
        graph_internal::GraphInternal,
        palm_dfs::run_palm_dfs,
        pathfinder::run_pathfinder,
    },
};

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    id: usize,
    position: usize,
    source: Node,
    target: Node,
    kind: EdgeKind,
    start_path: bool,
    is_virtual: bool,
}

struct Graph<'a> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    internal: &'a GraphInternal,
    high: Vec<usize>,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let deco = &self.internal.nodes[*n].deco;
        dot::LabelText::label(format!(
            "{}\nnum:{}\nhigh:{}\nl1:{} l2:{}\np:{} nd:{}",
            n,
            deco.num,
            self.high[*n],
            deco.lowpt1,
            deco.lowpt2,
            match self.internal.parent(*n) {
                Some(p) => p.to_string(),
                None => "Root".to_string(),
            },
            deco.nd
        ))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!(
            "{}{}({}) {:?} {}",
            if e.is_virtual { "v" } else { "" },
            e.id,
            e.position,
            e.kind,
            if e.start_path { "start" } else { "" }
        ))
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Renders the live part of a decorated working graph in DOT format.
///
/// Nodes show `num`, the high point, the low points, the parent and `nd`,
/// edges their id, position in the out-list of their source, kind and whether they start a path.
pub(crate) fn draw_palm_tree(internal: &mut GraphInternal) -> String {
    let high = (0..internal.node_count())
        .map(|u| internal.high(u))
        .collect();
    let internal = &*internal;

    let mut graph = Graph {
        nodes: (0..internal.node_count())
            .filter(|&u| internal.nodes[u].alive)
            .collect(),
        edges: Vec::new(),
        internal,
        high,
    };

    for &u in &graph.nodes {
        for (position, entry) in internal.entries(u).enumerate() {
            let eid = internal.entry_edge(entry);
            let edge = &internal.edges[eid];
            graph.edges.push(Edge {
                id: edge.deco.origin.output_id(),
                position,
                source: edge.source,
                target: edge.target,
                kind: edge.deco.kind,
                start_path: edge.deco.start_path,
                is_virtual: edge.deco.is_virtual(),
            });
        }
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&graph, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}

/// Builds the palm tree of `in_graph` rooted at `root`, as seen by the path search,
/// and renders it in DOT format. Useful to follow the decomposition by hand.
///
/// The graph must be connected.
pub fn draw_palm_tree_of(in_graph: &UnGraph, root: usize) -> String {
    let mut graph = GraphInternal::from_petgraph(in_graph);
    run_palm_dfs(&mut graph, root);
    make_adjacency_lists_acceptable(&mut graph);
    run_pathfinder(&mut graph, root);

    draw_palm_tree(&mut graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdgeLabel;
    use petgraph::visit::NodeIndexable;

    #[test]
    fn test_draw_square_with_chord() {
        let mut g = UnGraph::new_undirected();
        for i in 0..4 {
            g.add_node(i);
        }
        for (s, t) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)] {
            g.add_edge(g.from_index(s), g.from_index(t), EdgeLabel::Real);
        }

        let out = draw_palm_tree_of(&g, 0);
        assert!(out.starts_with("digraph G {"));
        assert!(out.contains("num:1"));
        assert!(out.contains("Root"));
        assert_eq!(out.matches("TreeArc").count(), 3);
        assert_eq!(out.matches("Frond").count(), 2);
    }
}
