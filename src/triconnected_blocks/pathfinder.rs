use crate::triconnected_blocks::{
    decorations::EdgeKind,
    dfs_explorer::{DfsStrategy, Visit, explore},
    graph_internal::{EdgeId, GraphInternal, NodeId},
};

/// Classifies the entries of the reordered out-lists.
pub(crate) fn classify_arc(graph: &GraphInternal, eid: EdgeId) -> Visit {
    let edge = &graph.edges[eid];
    match edge.deco.kind {
        EdgeKind::TreeArc => Visit::Tree(edge.target),
        EdgeKind::Frond => Visit::Frond(edge.target),
        EdgeKind::Unclassified => Visit::Skip,
    }
}

/// Second pass: renumbers the vertices and collects the high points.
struct Pathfinder {
    counter: usize, // vertices not yet finished
}

impl DfsStrategy for Pathfinder {
    fn classify(&mut self, graph: &GraphInternal, _v: NodeId, eid: EdgeId) -> Visit {
        classify_arc(graph, eid)
    }

    fn enter_node(&mut self, graph: &mut GraphInternal, v: NodeId) {
        let deco = &mut graph.nodes[v].deco;
        let num = self.counter - deco.nd + 1;
        deco.enter(num);
        deco.high_points.clear();
    }

    fn process_frond(&mut self, graph: &mut GraphInternal, v: NodeId, eid: EdgeId, w: NodeId) {
        graph.nodes[w].deco.high_points.push(eid);
        graph.edges[eid].deco.in_high = true;

        let w_num = graph.num(w);
        graph.nodes[v].deco.fold_frond(w_num);
    }

    fn after_child(&mut self, graph: &mut GraphInternal, v: NodeId, _eid: EdgeId, w: NodeId) {
        self.counter -= 1;

        let (low1, low2) = (graph.nodes[w].deco.lowpt1, graph.nodes[w].deco.lowpt2);
        graph.nodes[v].deco.merge_child(low1, low2);
    }
}

/// Renumbers the vertices so that they are numbered in reverse order of their last visit,
/// recomputes the low points for the new numbering and fills `high_points`.
///
/// Needs the palm tree and the acceptable adjacency lists.
/// After this pass the root has number 1 and the children of a vertex visited first
/// occupy the highest numbers of its subtree.
pub(crate) fn run_pathfinder(graph: &mut GraphInternal, root: NodeId) {
    let counter = graph.nodes[root].deco.nd;
    explore(graph, root, &mut Pathfinder { counter });

    // the first visited frond should be the last one
    for node in graph.nodes.iter_mut() {
        node.deco.high_points.reverse();
    }
}
