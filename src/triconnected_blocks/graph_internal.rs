use petgraph::visit::EdgeRef;

use crate::{
    UnGraph,
    triconnected_blocks::decorations::{DecoratedEdge, DecoratedNode, EdgeKind, EdgeOrigin},
};

pub(crate) type NodeId = usize;
pub(crate) type EdgeId = usize;
pub(crate) type AdjId = usize;

/// Where a new incidence entry goes in a node's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertAt {
    Front,
    Back,
    Before(AdjId),
    After(AdjId),
}

#[derive(Debug, Clone)]
struct AdjEntry {
    edge: EdgeId,
    prev: Option<AdjId>,
    next: Option<AdjId>,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeSlot {
    pub alive: bool,
    pub degree: usize,
    head: Option<AdjId>,
    tail: Option<AdjId>,
    pub deco: DecoratedNode,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot {
    pub source: NodeId,
    pub target: NodeId,
    pub alive: bool,
    entries: [Option<AdjId>; 2], // incidence entries at source and target
    pub deco: DecoratedEdge,
}

/// Throwaway working copy of the input graph.
///
/// Nodes, edges and incidence entries live in flat arenas and are never recycled,
/// so an index handed out once stays valid until the copy is dropped.
/// Node `i` of the copy is node `i` of the input.
#[derive(Debug, Clone)]
pub(crate) struct GraphInternal {
    pub nodes: Vec<NodeSlot>,
    pub edges: Vec<EdgeSlot>,
    adj: Vec<AdjEntry>,
}

impl GraphInternal {
    pub fn new(n: usize) -> Self {
        Self {
            nodes: (0..n)
                .map(|_| NodeSlot {
                    alive: true,
                    degree: 0,
                    head: None,
                    tail: None,
                    deco: DecoratedNode::default(),
                })
                .collect(),
            edges: Vec::new(),
            adj: Vec::new(),
        }
    }

    /// Copies the input, listing every edge at both of its ends.
    pub fn from_petgraph(graph: &UnGraph) -> Self {
        let mut ret = Self::new(graph.node_count());

        for e in graph.edge_references() {
            ret.add_edge(
                e.source().index(),
                e.target().index(),
                EdgeOrigin::Real(e.id().index()),
                InsertAt::Back,
                Some(InsertAt::Back),
            );
        }

        ret
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds an edge `source -> target`.
    ///
    /// The edge is always listed at `source`, and at `target` only if `at_target` is given.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        origin: EdgeOrigin,
        at_source: InsertAt,
        at_target: Option<InsertAt>,
    ) -> EdgeId {
        let eid = self.edges.len();
        self.edges.push(EdgeSlot {
            source,
            target,
            alive: true,
            entries: [None, None],
            deco: DecoratedEdge::new(origin),
        });

        self.edges[eid].entries[0] = Some(self.link(source, eid, at_source));
        if let Some(at_target) = at_target {
            self.edges[eid].entries[1] = Some(self.link(target, eid, at_target));
        }

        self.nodes[source].degree += 1;
        self.nodes[target].degree += 1;

        eid
    }

    /// Removes an edge, and each of its ends that is left without edges.
    pub fn remove_edge(&mut self, eid: EdgeId) {
        debug_assert!(self.edges[eid].alive, "edge {eid} removed twice");

        self.edges[eid].alive = false;
        for side in 0..2 {
            if let Some(entry) = self.edges[eid].entries[side].take() {
                let owner = if side == 0 {
                    self.edges[eid].source
                } else {
                    self.edges[eid].target
                };
                self.unlink(owner, entry);
            }
        }

        let (s, t) = (self.edges[eid].source, self.edges[eid].target);
        for u in [s, t] {
            self.nodes[u].degree -= 1;
            if self.nodes[u].degree == 0 {
                self.nodes[u].alive = false;
            }
        }
    }

    /// Points the edge from `source` to the other end, keeping its entries on the right sides.
    pub fn orient(&mut self, eid: EdgeId, source: NodeId) {
        let edge = &mut self.edges[eid];
        if edge.source != source {
            debug_assert_eq!(edge.target, source);
            std::mem::swap(&mut edge.source, &mut edge.target);
            edge.entries.swap(0, 1);
        }
    }

    pub fn opposite(&self, eid: EdgeId, u: NodeId) -> NodeId {
        let edge = &self.edges[eid];
        if edge.source == u { edge.target } else { edge.source }
    }

    pub fn connects(&self, eid: EdgeId, u: NodeId, v: NodeId) -> bool {
        let edge = &self.edges[eid];
        (edge.source == u && edge.target == v) || (edge.source == v && edge.target == u)
    }

    pub fn num(&self, u: NodeId) -> usize {
        self.nodes[u].deco.num
    }

    pub fn parent(&self, u: NodeId) -> Option<NodeId> {
        self.nodes[u]
            .deco
            .parent_edge
            .map(|eid| self.edges[eid].source)
    }

    pub fn first_entry(&self, u: NodeId) -> Option<AdjId> {
        self.nodes[u].head
    }

    pub fn next_entry(&self, entry: AdjId) -> Option<AdjId> {
        self.adj[entry].next
    }

    pub fn entry_edge(&self, entry: AdjId) -> EdgeId {
        self.adj[entry].edge
    }

    /// Incidence entry of the edge at its source.
    pub fn source_entry(&self, eid: EdgeId) -> Option<AdjId> {
        self.edges[eid].entries[0]
    }

    pub fn entries(&self, u: NodeId) -> impl Iterator<Item = AdjId> + '_ {
        std::iter::successors(self.nodes[u].head, |&entry| self.adj[entry].next)
    }

    /// Other end of the first edge listed at `u`.
    pub fn first_child(&self, u: NodeId) -> Option<NodeId> {
        self.nodes[u]
            .head
            .map(|entry| self.opposite(self.adj[entry].edge, u))
    }

    /// Rewrites every incidence list from the staged `ordered_adjacency`.
    ///
    /// From now on an edge is listed only at its source.
    pub fn commit_ordered_adjacency(&mut self) {
        for node in self.nodes.iter_mut() {
            node.head = None;
            node.tail = None;
        }
        for edge in self.edges.iter_mut() {
            edge.entries = [None, None];
        }

        for u in 0..self.nodes.len() {
            let order = std::mem::take(&mut self.nodes[u].deco.ordered_adjacency);
            for eid in order {
                debug_assert_eq!(self.edges[eid].source, u);
                self.edges[eid].entries[0] = Some(self.link(u, eid, InsertAt::Back));
            }
        }
    }

    /// Number of the source of the first visited live frond landing at `u`, 0 if there is none.
    pub fn high(&mut self, u: NodeId) -> usize {
        while let Some(&eid) = self.nodes[u].deco.high_points.last() {
            if self.edges[eid].alive {
                return self.num(self.edges[eid].source);
            }
            self.nodes[u].deco.high_points.pop();
            self.edges[eid].deco.in_high = false;
        }
        0
    }

    /// Makes the frond `eid` the high point of its target, if its source is higher than the current one.
    pub fn offer_high_point(&mut self, eid: EdgeId) {
        debug_assert_eq!(self.edges[eid].deco.kind, EdgeKind::Frond);

        let (s, t) = (self.edges[eid].source, self.edges[eid].target);
        if self.edges[eid].deco.in_high || self.high(t) >= self.num(s) {
            return;
        }
        self.nodes[t].deco.high_points.push(eid);
        self.edges[eid].deco.in_high = true;
    }

    fn link(&mut self, u: NodeId, eid: EdgeId, at: InsertAt) -> AdjId {
        let id = self.adj.len();
        let (prev, next) = match at {
            InsertAt::Front => (None, self.nodes[u].head),
            InsertAt::Back => (self.nodes[u].tail, None),
            InsertAt::Before(entry) => (self.adj[entry].prev, Some(entry)),
            InsertAt::After(entry) => (Some(entry), self.adj[entry].next),
        };
        self.adj.push(AdjEntry {
            edge: eid,
            prev,
            next,
        });

        match prev {
            Some(p) => self.adj[p].next = Some(id),
            None => self.nodes[u].head = Some(id),
        }
        match next {
            Some(n) => self.adj[n].prev = Some(id),
            None => self.nodes[u].tail = Some(id),
        }

        id
    }

    fn unlink(&mut self, u: NodeId, entry: AdjId) {
        let AdjEntry { prev, next, .. } = self.adj[entry];
        match prev {
            Some(p) => self.adj[p].next = next,
            None => self.nodes[u].head = next,
        }
        match next {
            Some(n) => self.adj[n].prev = prev,
            None => self.nodes[u].tail = prev,
        }
    }
}
