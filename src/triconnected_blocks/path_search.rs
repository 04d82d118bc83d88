use crate::triconnected_blocks::{
    decorations::{EdgeKind, EdgeOrigin},
    dfs_explorer::{DfsStrategy, Visit, explore},
    graph_internal::{EdgeId, GraphInternal, InsertAt, NodeId},
    outside_structures::ComponentSink,
    pathfinder::classify_arc,
    tstack::TStack,
};

/// Third pass: finds the separation pairs along the paths and cuts off the split components.
struct PathSearch<'a, S: ComponentSink> {
    sink: &'a mut S,
    root: NodeId,

    estack: Vec<EdgeId>,
    tstack: TStack,
    node_at: Vec<NodeId>, // node with the given number
    outgoing_path: bool,  // the next edge continues the current path
    tree_arcs_left: Vec<usize>,
}

impl<S: ComponentSink> PathSearch<'_, S> {
    fn tree_arc(graph: &GraphInternal, w: NodeId) -> EdgeId {
        graph.nodes[w]
            .deco
            .parent_edge
            .expect("only the root has no tree arc")
    }

    /// Type-2 separation pairs `{v, b}` with `b` inside the subtree of the child `w`.
    ///
    /// Returns the child that replaces `w` after the splits.
    fn check_for_type2s(&mut self, graph: &mut GraphInternal, v: NodeId, mut w: NodeId) -> NodeId {
        if v == self.root {
            return w;
        }
        let vnum = graph.num(v);

        loop {
            let (h, a, b) = (self.tstack.h(), self.tstack.a(), self.tstack.b());
            let triangle = graph.nodes[w].degree == 2
                && graph
                    .first_child(w)
                    .is_some_and(|child| graph.num(child) > graph.num(w));

            if a != vnum && !triangle {
                break;
            }
            if a == vnum && graph.parent(self.node_at[b]) == Some(v) {
                self.tstack.pop();
                continue;
            }

            let slot = graph
                .source_entry(Self::tree_arc(graph, w))
                .expect("tree arc is listed at its source");
            let mut component = Vec::new();
            let mut e_ab = None;
            let x;

            if triangle {
                // v -> w -> x, w has nothing else
                let e1 = self.estack.pop().expect("tree arc v -> w is on the stack");
                let e2 = self.estack.pop().expect("tree arc w -> x is on the stack");
                x = graph.edges[e2].target;
                component.push(e1);
                component.push(e2);

                if self
                    .estack
                    .last()
                    .is_some_and(|&top| graph.connects(top, x, v))
                {
                    e_ab = self.estack.pop();
                }
            } else {
                self.tstack.pop();
                x = self.node_at[b];

                let inside = |u: NodeId| (vnum..=h).contains(&graph.num(u));
                while let Some(&eid) = self.estack.last() {
                    let edge = &graph.edges[eid];
                    if !(inside(edge.source) && inside(edge.target)) {
                        break;
                    }
                    self.estack.pop();

                    if graph.connects(eid, v, x) {
                        e_ab = Some(eid);
                    } else {
                        component.push(eid);
                    }
                }
            }

            let pair = self
                .sink
                .make_new_nodes_edges_and_components(graph, &component, v, x, e_ab);

            let e_virt = graph.add_edge(
                v,
                x,
                EdgeOrigin::Virtual(pair),
                InsertAt::Before(slot),
                None,
            );
            graph.edges[e_virt].deco.kind = EdgeKind::TreeArc;
            graph.nodes[x].deco.parent_edge = Some(e_virt);

            for eid in component.into_iter().chain(e_ab) {
                graph.remove_edge(eid);
            }

            self.estack.push(e_virt);
            w = x;
        }

        w
    }

    /// Type-1 separation pair `{lowpt1(w), v}`: the subtree of `w` hangs only on `v` and one ancestor.
    fn check_for_type1(&mut self, graph: &mut GraphInternal, v: NodeId, w: NodeId) {
        let vnum = graph.num(v);
        let deco = &graph.nodes[w].deco;
        let (wnum, wnd, low1, low2) = (deco.num, deco.nd, deco.lowpt1, deco.lowpt2);

        let more_to_come = graph.parent(v) != Some(self.root) || self.tree_arcs_left[v] > 0;
        if !(low2 >= vnum && low1 < vnum && more_to_come) {
            return;
        }

        let a = self.node_at[low1];
        let slot = graph
            .source_entry(Self::tree_arc(graph, w))
            .expect("tree arc is listed at its source");

        let mut component = Vec::new();
        let in_subtree = |u: NodeId| (wnum..wnum + wnd).contains(&graph.num(u));
        while let Some(&eid) = self.estack.last() {
            let edge = &graph.edges[eid];
            if !(in_subtree(edge.source) || in_subtree(edge.target)) {
                break;
            }
            self.estack.pop();
            component.push(eid);
        }

        let boundary = self
            .estack
            .last()
            .copied()
            .filter(|&top| graph.connects(top, v, a));

        let frond_to_a = if let Some(e_ab) = boundary {
            // the frond v -> a stands for the rest of the graph from now on
            let pair = self
                .sink
                .make_new_nodes_edges_and_components(graph, &component, v, a, Some(e_ab));
            graph.edges[e_ab].deco.origin = EdgeOrigin::Virtual(pair);
            Some(e_ab)
        } else if graph.parent(v) == Some(a) {
            let arc = Self::tree_arc(graph, v);
            let pair = self
                .sink
                .make_new_nodes_edges_and_components(graph, &component, v, a, Some(arc));
            graph.edges[arc].deco.origin = EdgeOrigin::Virtual(pair);
            None
        } else {
            let pair = self
                .sink
                .make_new_nodes_edges_and_components(graph, &component, v, a, None);
            let e_virt = graph.add_edge(
                v,
                a,
                EdgeOrigin::Virtual(pair),
                InsertAt::Before(slot),
                None,
            );
            graph.edges[e_virt].deco.kind = EdgeKind::Frond;
            self.estack.push(e_virt);
            Some(e_virt)
        };

        for eid in component {
            graph.remove_edge(eid);
        }
        // high(a) must no longer see the fronds of the removed subtree
        if let Some(frond) = frond_to_a {
            graph.offer_high_point(frond);
        }
    }
}

impl<S: ComponentSink> DfsStrategy for PathSearch<'_, S> {
    fn classify(&mut self, graph: &GraphInternal, _v: NodeId, eid: EdgeId) -> Visit {
        classify_arc(graph, eid)
    }

    fn enter_node(&mut self, graph: &mut GraphInternal, v: NodeId) {
        self.tree_arcs_left[v] = graph
            .entries(v)
            .filter(|&entry| graph.edges[graph.entry_edge(entry)].deco.kind == EdgeKind::TreeArc)
            .count();
    }

    fn leave_node(&mut self, graph: &mut GraphInternal, v: NodeId) {
        if v != self.root {
            return;
        }

        let edges = std::mem::take(&mut self.estack);
        self.sink.make_final_tree_node_and_component(graph, &edges);
        for eid in edges {
            graph.remove_edge(eid);
        }
    }

    fn process_frond(&mut self, graph: &mut GraphInternal, v: NodeId, eid: EdgeId, w: NodeId) {
        let start = !self.outgoing_path;
        graph.edges[eid].deco.start_path = start;
        if start {
            self.tstack.update_for_frond(graph.num(v), graph.num(w));
        }

        self.outgoing_path = false;
        self.estack.push(eid);
    }

    fn before_child(&mut self, graph: &mut GraphInternal, v: NodeId, eid: EdgeId, w: NodeId) {
        let start = !self.outgoing_path;
        graph.edges[eid].deco.start_path = start;
        if start {
            let child = &graph.nodes[w].deco;
            self.tstack.update_for_tree_arc(
                child.num + child.nd - 1,
                child.lowpt1,
                graph.num(v),
            );
        }

        self.outgoing_path = true;
    }

    fn after_child(&mut self, graph: &mut GraphInternal, v: NodeId, eid: EdgeId, w: NodeId) {
        let started = graph.edges[eid].deco.start_path;
        self.tree_arcs_left[v] -= 1;

        self.estack.push(Self::tree_arc(graph, w));

        let w = self.check_for_type2s(graph, v, w);
        self.check_for_type1(graph, v, w);

        if started {
            self.tstack.pop_until_and_including_eos();
        }

        let high = graph.high(v);
        self.tstack.pop_until_higher_h(graph.num(v), high);
    }
}

/// Runs the path search from `root`, handing every split component to `sink`.
///
/// Needs the numbering, low points and high points of the second pass.
/// Every edge of the working graph is consumed: the graph is empty afterwards.
pub(crate) fn run_path_search<S: ComponentSink>(
    graph: &mut GraphInternal,
    root: NodeId,
    sink: &mut S,
) {
    let n = graph.node_count();
    let mut node_at = vec![root; n + 1];
    for u in 0..n {
        node_at[graph.num(u)] = u;
    }

    let mut tstack = TStack::new();
    tstack.push_eos();

    let mut search = PathSearch {
        sink,
        root,
        estack: Vec::new(),
        tstack,
        node_at,
        outgoing_path: false,
        tree_arcs_left: vec![0; n],
    };
    explore(graph, root, &mut search);
}
