use crate::triconnected_blocks::graph_internal::EdgeId;

/// Role of an edge in the palm tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum EdgeKind {
    #[default]
    Unclassified,
    TreeArc,
    Frond,
}

/// Links a virtual edge of the working graph to its twin inside an emitted component.
///
/// - `edge`: id of the virtual edge in [`TriconnectedComponents::edges`](crate::triconnected_blocks::outside_structures::TriconnectedComponents)
/// - `tree_node`: index of the component holding the twin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VirtualPair {
    pub edge: usize,
    pub tree_node: usize,
}

/// Where an edge of the working graph comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeOrigin {
    /// Edge of the input graph, with its index there.
    Real(usize),
    /// Split boundary standing in for an already emitted component.
    Virtual(VirtualPair),
}

impl EdgeOrigin {
    /// Id of the edge in the output edge table.
    pub fn output_id(&self) -> usize {
        match self {
            EdgeOrigin::Real(eid) => *eid,
            EdgeOrigin::Virtual(pair) => pair.edge,
        }
    }
}

/// Per-node bookkeeping of the three passes.
#[derive(Debug, Clone, Default)]
pub(crate) struct DecoratedNode {
    pub num: usize, // 0 means not visited yet
    pub lowpt1: usize,
    pub lowpt2: usize,
    pub parent_edge: Option<EdgeId>,
    pub nd: usize, // descendants, including the node itself

    pub ordered_adjacency: Vec<EdgeId>, // staged incidence order, committed before pass 2
    pub high_points: Vec<EdgeId>,       // fronds landing here, the first visited one is last
}

impl DecoratedNode {
    pub fn enter(&mut self, num: usize) {
        self.num = num;
        self.lowpt1 = num;
        self.lowpt2 = num;
    }

    /// Folds the head of a frond into the low points.
    pub fn fold_frond(&mut self, w_num: usize) {
        if w_num < self.lowpt1 {
            self.lowpt2 = self.lowpt1;
            self.lowpt1 = w_num;
        } else if w_num > self.lowpt1 {
            self.lowpt2 = self.lowpt2.min(w_num);
        }
    }

    /// Folds the low points of a finished child into ours.
    pub fn merge_child(&mut self, child_low1: usize, child_low2: usize) {
        if child_low1 < self.lowpt1 {
            self.lowpt2 = self.lowpt1.min(child_low2);
            self.lowpt1 = child_low1;
        } else if child_low1 == self.lowpt1 {
            self.lowpt2 = self.lowpt2.min(child_low2);
        } else {
            self.lowpt2 = self.lowpt2.min(child_low1);
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DecoratedEdge {
    pub kind: EdgeKind,
    pub phi: usize,
    pub start_path: bool,
    pub origin: EdgeOrigin,
    pub in_high: bool, // currently listed in the high points of its target
}

impl DecoratedEdge {
    pub fn new(origin: EdgeOrigin) -> Self {
        Self {
            kind: EdgeKind::Unclassified,
            phi: 0,
            start_path: false,
            origin,
            in_high: false,
        }
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self.origin, EdgeOrigin::Virtual(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_frond_keeps_two_lowest() {
        let mut node = DecoratedNode::default();
        node.enter(5);

        node.fold_frond(3);
        assert_eq!((node.lowpt1, node.lowpt2), (3, 5));

        node.fold_frond(1);
        assert_eq!((node.lowpt1, node.lowpt2), (1, 3));

        node.fold_frond(2);
        assert_eq!((node.lowpt1, node.lowpt2), (1, 2));

        // equal to lowpt1 does not count twice
        node.fold_frond(1);
        assert_eq!((node.lowpt1, node.lowpt2), (1, 2));
    }

    #[test]
    fn test_merge_child() {
        let mut node = DecoratedNode::default();
        node.enter(4);

        node.merge_child(2, 3);
        assert_eq!((node.lowpt1, node.lowpt2), (2, 3));

        node.merge_child(2, 2);
        assert_eq!((node.lowpt1, node.lowpt2), (2, 2));

        let mut node = DecoratedNode::default();
        node.enter(4);
        node.merge_child(5, 5);
        assert_eq!((node.lowpt1, node.lowpt2), (4, 4));

        node.merge_child(1, 6);
        assert_eq!((node.lowpt1, node.lowpt2), (1, 4));
    }

    #[test]
    fn test_origin_output_id() {
        assert_eq!(EdgeOrigin::Real(7).output_id(), 7);
        let virt = EdgeOrigin::Virtual(VirtualPair {
            edge: 11,
            tree_node: 2,
        });
        assert_eq!(virt.output_id(), 11);
        assert!(DecoratedEdge::new(virt).is_virtual());
    }
}
