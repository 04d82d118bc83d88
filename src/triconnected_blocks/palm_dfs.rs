use crate::triconnected_blocks::{
    decorations::EdgeKind,
    dfs_explorer::{DfsStrategy, Visit, explore},
    graph_internal::{EdgeId, GraphInternal, NodeId},
};

/// First pass: builds the palm tree.
struct PalmDfs {
    time: usize,
}

impl DfsStrategy for PalmDfs {
    fn classify(&mut self, graph: &GraphInternal, v: NodeId, eid: EdgeId) -> Visit {
        if graph.edges[eid].deco.kind != EdgeKind::Unclassified {
            return Visit::Skip; // already seen from the other end
        }

        let to = graph.opposite(eid, v);
        if graph.num(to) == 0 {
            Visit::Tree(to)
        } else {
            Visit::Frond(to)
        }
    }

    fn enter_node(&mut self, graph: &mut GraphInternal, v: NodeId) {
        self.time += 1;
        let deco = &mut graph.nodes[v].deco;
        deco.enter(self.time);
        deco.nd = 1;
    }

    fn process_frond(&mut self, graph: &mut GraphInternal, v: NodeId, eid: EdgeId, w: NodeId) {
        graph.edges[eid].deco.kind = EdgeKind::Frond;
        graph.orient(eid, v);

        let w_num = graph.num(w);
        graph.nodes[v].deco.fold_frond(w_num);
    }

    fn before_child(&mut self, graph: &mut GraphInternal, v: NodeId, eid: EdgeId, _w: NodeId) {
        graph.edges[eid].deco.kind = EdgeKind::TreeArc;
        graph.orient(eid, v);
    }

    fn after_child(&mut self, graph: &mut GraphInternal, v: NodeId, eid: EdgeId, w: NodeId) {
        let (low1, low2, nd) = {
            let child = &mut graph.nodes[w].deco;
            child.parent_edge = Some(eid);
            (child.lowpt1, child.lowpt2, child.nd)
        };

        let deco = &mut graph.nodes[v].deco;
        deco.merge_child(low1, low2);
        deco.nd += nd;
    }
}

/// Given a graph, this function calculates the `palm tree` of the graph with a depth-first search.
///
/// In particular, it calculates the values needed further in the algorithm:
/// - `num[u]` - the order of the vertex in the DFS traversal (preorder number, starting from 1)
/// - `lowpt1[u]` - the lowest `num` reachable from `u` via tree arcs and at most one frond
/// - `lowpt2[u]` - the second lowest such `num`
/// - `nd[u]` - the size of the subtree rooted at `u`
/// - `parent_edge[u]` - the tree arc entering `u`, `None` for the root
///
/// It also classifies every edge as a tree arc or a frond and orients it:
/// tree arcs point away from the root, fronds point towards it.
pub(crate) fn run_palm_dfs(graph: &mut GraphInternal, root: NodeId) {
    explore(graph, root, &mut PalmDfs { time: 0 });
}

/// Why a palm tree shows that its graph is not biconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Separation {
    Unreached(NodeId),
    ArticulationPoint(NodeId),
}

/// Looks for a reason the graph is not biconnected, using the low points of the first pass.
///
/// - a non-root `v` is an articulation point if some child `w` has `lowpt1[w] >= num[v]`,
/// - the root is one if it has at least two children.
pub(crate) fn find_separation(graph: &GraphInternal, root: NodeId) -> Option<Separation> {
    if let Some(u) = (0..graph.node_count()).find(|&u| graph.num(u) == 0) {
        return Some(Separation::Unreached(u));
    }

    let mut root_children = 0;
    for w in 0..graph.node_count() {
        let Some(v) = graph.parent(w) else {
            continue;
        };

        if v == root {
            root_children += 1;
            if root_children > 1 {
                return Some(Separation::ArticulationPoint(root));
            }
        } else if graph.nodes[w].deco.lowpt1 >= graph.num(v) {
            return Some(Separation::ArticulationPoint(v));
        }
    }

    None
}
