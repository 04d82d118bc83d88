use crate::triconnected_blocks::{
    decorations::{EdgeOrigin, VirtualPair},
    graph_internal::{EdgeId, GraphInternal, NodeId},
    merge_components::merge_components,
};

/// Represents the type of a component in the triconnected block decomposition.
///
/// - `P`: Bond (two vertices joined by parallel edges)
/// - `S`: Polygon (simple cycle)
/// - `R`: Triconnected component (rigid)
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub enum ComponentType {
    P,
    S,
    R,
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentType::P => write!(f, "P"),
            ComponentType::S => write!(f, "S"),
            ComponentType::R => write!(f, "R"),
        }
    }
}

/// Represents a component in the triconnected block decomposition.
///
/// Contains a list of edges that belong to the component and its type.
/// Edges are ids in [`TriconnectedComponents::edges`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub edges: Vec<usize>,
    pub component_type: ComponentType,
}

impl Component {
    /// Builds a component and classifies it from its edges.
    pub fn new(edges: Vec<usize>, endpoints: &[(usize, usize)]) -> Self {
        let component_type = classify(&edges, endpoints);
        Self {
            edges,
            component_type,
        }
    }
}

/// Classifies a set of edges:
/// - at most two distinct vertices: `P`,
/// - as many edges as vertices and every vertex of degree two: `S`,
/// - anything else: `R`.
pub(crate) fn classify(edges: &[usize], endpoints: &[(usize, usize)]) -> ComponentType {
    let mut ends: Vec<usize> = edges
        .iter()
        .flat_map(|&eid| {
            let (s, t) = endpoints[eid];
            [s, t]
        })
        .collect();
    ends.sort_unstable();

    let vertex_count = ends.chunk_by(|a, b| a == b).count();
    if vertex_count <= 2 {
        return ComponentType::P;
    }

    let is_cycle = ends.chunk_by(|a, b| a == b).all(|run| run.len() == 2);
    if is_cycle && vertex_count == edges.len() {
        ComponentType::S
    } else {
        ComponentType::R
    }
}

/// What the path search hands the finished components to.
pub(crate) trait ComponentSink {
    /// Called once, when the walk leaves the root, with the edges left on the edge stack.
    fn make_final_tree_node_and_component(&mut self, graph: &GraphInternal, edges: &[EdgeId]);

    /// Called once per split at `{a, b}`. `edges` are the working edges cut off, `boundary`
    /// the working edge between `a` and `b` that was found next to them, if any.
    ///
    /// Returns the pairing the working edge `a - b` that stays in the graph must carry.
    fn make_new_nodes_edges_and_components(
        &mut self,
        graph: &GraphInternal,
        edges: &[EdgeId],
        a: NodeId,
        b: NodeId,
        boundary: Option<EdgeId>,
    ) -> VirtualPair;
}

/// Holds the triconnected components of a graph.
///
/// Contains a list of components, edges, and additional metadata about the edges.
///
/// - `components`: List of components in the triconnected decomposition.
/// - `edges`: List of edges in the graph. Input edges keep their index, virtual edges come after them.
/// - `is_real_edge`: Indicates if an edge is a real edge in the original graph.
/// - `real_to_split`: Maps edges to the component holding them. Virtual edges are mapped to `None`.
///
/// Every virtual edge appears in exactly two components, the two it glues together.
#[derive(Debug, Clone, Default)]
pub struct TriconnectedComponents {
    pub components: Vec<Component>,
    pub edges: Vec<(usize, usize)>,
    pub is_real_edge: Vec<bool>,
    pub real_to_split: Vec<Option<usize>>,
}

impl TriconnectedComponents {
    /// Starts an empty decomposition of a graph with the given edges.
    pub fn new(edges: Vec<(usize, usize)>) -> Self {
        let m = edges.len();
        Self {
            components: Vec::new(),
            edges,
            is_real_edge: vec![true; m],
            real_to_split: vec![None; m],
        }
    }

    /// Number of components of each type, in `P`, `S`, `R` order.
    pub fn count_by_type(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for component in &self.components {
            counts[component.component_type as usize] += 1;
        }
        counts
    }

    fn new_virtual_edge(&mut self, a: NodeId, b: NodeId) -> usize {
        self.edges.push((a, b));
        self.is_real_edge.push(false);
        self.real_to_split.push(None);
        self.edges.len() - 1
    }

    fn push_component(&mut self, edges: Vec<usize>) -> usize {
        let component = Component::new(edges, &self.edges);
        self.components.push(component);
        self.components.len() - 1
    }

    /// Merges adjacent bonds and adjacent polygons, drops the virtual edges this makes
    /// internal and fills the per-edge metadata.
    pub(crate) fn finish(&mut self) {
        let real_count = self.is_real_edge.iter().filter(|&&real| real).count();

        let components = std::mem::take(&mut self.components);
        let (components, edges) = merge_components(real_count, components, &self.edges);
        self.components = components;
        self.edges = edges;

        self.is_real_edge = (0..self.edges.len()).map(|eid| eid < real_count).collect();
        self.real_to_split = vec![None; self.edges.len()];
        for (i, component) in self.components.iter().enumerate() {
            for &eid in &component.edges {
                if eid < real_count {
                    self.real_to_split[eid] = Some(i);
                }
            }
        }
    }
}

impl ComponentSink for TriconnectedComponents {
    fn make_final_tree_node_and_component(&mut self, graph: &GraphInternal, edges: &[EdgeId]) {
        let ids = edges
            .iter()
            .map(|&eid| graph.edges[eid].deco.origin.output_id())
            .collect();
        self.push_component(ids);
    }

    fn make_new_nodes_edges_and_components(
        &mut self,
        graph: &GraphInternal,
        edges: &[EdgeId],
        a: NodeId,
        b: NodeId,
        boundary: Option<EdgeId>,
    ) -> VirtualPair {
        let vid = self.new_virtual_edge(a, b);
        let mut ids: Vec<usize> = edges
            .iter()
            .map(|&eid| graph.edges[eid].deco.origin.output_id())
            .collect();
        ids.push(vid);
        let tree_node = self.push_component(ids);

        let Some(boundary) = boundary else {
            return VirtualPair {
                edge: vid,
                tree_node,
            };
        };

        match graph.edges[boundary].deco.origin {
            // the boundary already stands for a bond at {a, b}: extend it
            EdgeOrigin::Virtual(pair)
                if self.components[pair.tree_node].component_type == ComponentType::P =>
            {
                self.components[pair.tree_node].edges.push(vid);
                pair
            }
            origin => {
                let rest = self.new_virtual_edge(a, b);
                let bond = self.push_component(vec![origin.output_id(), vid, rest]);
                VirtualPair {
                    edge: rest,
                    tree_node: bond,
                }
            }
        }
    }
}
