use crate::triconnected_blocks::graph_internal::{AdjId, EdgeId, GraphInternal, NodeId};

/// What the walk should do with an incidence entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    Tree(NodeId),
    Frond(NodeId),
    Skip,
}

/// Callbacks of a depth-first walk over a [`GraphInternal`].
///
/// Every tree arc gets exactly one `before_child`/`after_child` pair, every frond one
/// `process_frond` and every reached node one `enter_node`/`leave_node` pair.
pub(crate) trait DfsStrategy {
    fn classify(&mut self, graph: &GraphInternal, v: NodeId, eid: EdgeId) -> Visit;

    fn enter_node(&mut self, _graph: &mut GraphInternal, _v: NodeId) {}

    fn leave_node(&mut self, _graph: &mut GraphInternal, _v: NodeId) {}

    fn process_frond(&mut self, _graph: &mut GraphInternal, _v: NodeId, _eid: EdgeId, _w: NodeId) {
    }

    fn before_child(&mut self, _graph: &mut GraphInternal, _v: NodeId, _eid: EdgeId, _w: NodeId) {}

    fn after_child(&mut self, _graph: &mut GraphInternal, _v: NodeId, _eid: EdgeId, _w: NodeId) {}
}

struct Frame {
    node: NodeId,
    cursor: Option<AdjId>, // next entry to look at
    via: Option<EdgeId>,   // tree arc we came down through
}

/// Walks the graph from `root` without native recursion.
///
/// The successor of an entry is read before any callback runs on it, so callbacks may
/// insert entries before the current one or unlink already visited ones.
pub(crate) fn explore<S: DfsStrategy>(graph: &mut GraphInternal, root: NodeId, strategy: &mut S) {
    strategy.enter_node(graph, root);
    let mut stack = vec![Frame {
        node: root,
        cursor: graph.first_entry(root),
        via: None,
    }];

    while let Some(top) = stack.last_mut() {
        let v = top.node;

        let Some(entry) = top.cursor else {
            let via = top.via;
            stack.pop();
            strategy.leave_node(graph, v);
            if let (Some(eid), Some(parent)) = (via, stack.last()) {
                strategy.after_child(graph, parent.node, eid, v);
            }
            continue;
        };

        top.cursor = graph.next_entry(entry);
        let eid = graph.entry_edge(entry);

        match strategy.classify(graph, v, eid) {
            Visit::Skip => {}
            Visit::Frond(w) => strategy.process_frond(graph, v, eid, w),
            Visit::Tree(w) => {
                strategy.before_child(graph, v, eid, w);
                strategy.enter_node(graph, w);
                stack.push(Frame {
                    node: w,
                    cursor: graph.first_entry(w),
                    via: Some(eid),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triconnected_blocks::{
        decorations::EdgeOrigin, graph_internal::InsertAt,
    };

    /// Records the order of callbacks, treating the lists as out-lists of a rooted tree.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        seen: Vec<bool>,
    }

    impl DfsStrategy for Recorder {
        fn classify(&mut self, graph: &GraphInternal, v: NodeId, eid: EdgeId) -> Visit {
            let w = graph.opposite(eid, v);
            if self.seen[w] { Visit::Frond(w) } else { Visit::Tree(w) }
        }
        fn enter_node(&mut self, _graph: &mut GraphInternal, v: NodeId) {
            self.seen[v] = true;
            self.events.push(format!("enter {v}"));
        }
        fn leave_node(&mut self, _graph: &mut GraphInternal, v: NodeId) {
            self.events.push(format!("leave {v}"));
        }
        fn process_frond(&mut self, _graph: &mut GraphInternal, v: NodeId, _eid: EdgeId, w: NodeId) {
            self.events.push(format!("frond {v}-{w}"));
        }
        fn before_child(&mut self, _graph: &mut GraphInternal, v: NodeId, _eid: EdgeId, w: NodeId) {
            self.events.push(format!("down {v}-{w}"));
        }
        fn after_child(&mut self, _graph: &mut GraphInternal, v: NodeId, _eid: EdgeId, w: NodeId) {
            self.events.push(format!("up {v}-{w}"));
        }
    }

    #[test]
    fn test_hooks_order() {
        // 0 -> 1 -> 2 -> 0, 0 -> 3
        let mut graph = GraphInternal::new(4);
        for (i, (s, t)) in [(0, 1), (1, 2), (2, 0), (0, 3)].into_iter().enumerate() {
            graph.add_edge(s, t, EdgeOrigin::Real(i), InsertAt::Back, None);
        }

        let mut rec = Recorder {
            seen: vec![false; 4],
            ..Default::default()
        };
        explore(&mut graph, 0, &mut rec);

        assert_eq!(
            rec.events,
            vec![
                "enter 0", "down 0-1", "enter 1", "down 1-2", "enter 2", "frond 2-0", "leave 2",
                "up 1-2", "leave 1", "up 0-1", "down 0-3", "enter 3", "leave 3", "up 0-3",
                "leave 0",
            ]
        );
    }

    #[test]
    fn test_deep_path_does_not_overflow() {
        let n = 200_000;
        let mut graph = GraphInternal::new(n);
        for i in 0..n - 1 {
            graph.add_edge(i, i + 1, EdgeOrigin::Real(i), InsertAt::Back, None);
        }

        let mut rec = Recorder {
            seen: vec![false; n],
            ..Default::default()
        };
        explore(&mut graph, 0, &mut rec);
        assert_eq!(rec.events.len(), 4 * (n - 1) + 2);
    }
}
