use fixedbitset::FixedBitSet;
use petgraph::unionfind::UnionFind;

use crate::triconnected_blocks::outside_structures::{Component, ComponentType};

/// Merges every two bonds or two polygons glued by a virtual edge, which makes the decomposition unique.
///
/// Edges `0..real_count` are real, the rest are virtual and each sits in exactly two components.
/// Virtual edges left inside a merged component are dropped and the remaining ones renumbered
/// to follow the real edges. Returns the merged components and the new edge table.
pub(crate) fn merge_components(
    real_count: usize,
    components: Vec<Component>,
    edges: &[(usize, usize)],
) -> (Vec<Component>, Vec<(usize, usize)>) {
    let m = edges.len();
    let k = components.len();

    let mut holders = vec![Vec::new(); m];
    for (i, component) in components.iter().enumerate() {
        for &eid in &component.edges {
            if eid >= real_count {
                holders[eid].push(i);
            }
        }
    }

    let mut groups = UnionFind::<usize>::new(k);
    let mut internal = FixedBitSet::with_capacity(m);
    for eid in real_count..m {
        let &[x, y] = holders[eid].as_slice() else {
            debug_assert!(
                holders[eid].is_empty(),
                "virtual edge {eid} glues {:?}",
                holders[eid]
            );
            continue;
        };

        let component_type = components[x].component_type;
        if component_type != ComponentType::R && component_type == components[y].component_type {
            groups.union(x, y);
            internal.insert(eid);
        }
    }

    // virtual edges that survive get consecutive ids after the real ones
    let mut new_id: Vec<Option<usize>> = (0..m)
        .map(|eid| (eid < real_count).then_some(eid))
        .collect();
    let mut new_edges = edges[..real_count].to_vec();
    for eid in real_count..m {
        if !internal.contains(eid) && !holders[eid].is_empty() {
            new_id[eid] = Some(new_edges.len());
            new_edges.push(edges[eid]);
        }
    }

    let mut group = vec![None; k];
    let mut merged: Vec<Component> = Vec::new();
    for (i, component) in components.into_iter().enumerate() {
        let root = groups.find_mut(i);
        let at = *group[root].get_or_insert_with(|| {
            merged.push(Component {
                edges: Vec::new(),
                component_type: component.component_type,
            });
            merged.len() - 1
        });

        merged[at]
            .edges
            .extend(component.edges.iter().filter_map(|&eid| new_id[eid]));
    }

    (merged, new_edges)
}
