use crate::EdgeLabel;
use crate::UnGraph;
use hashbrown::HashSet;
use petgraph::visit::NodeIndexable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Random connected graph: a random tree on `n` nodes plus `m - n + 1` random edges.
///
/// May contain self-loops and parallel edges.
pub fn random_graph(n: usize, m: usize, seed: usize) -> UnGraph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = UnGraph::new_undirected();

    for i in 0..n {
        graph.add_node(i as u32);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(graph.from_index(i), graph.from_index(j), EdgeLabel::Real);
        }
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        graph.add_edge(graph.from_index(s), graph.from_index(t), EdgeLabel::Real);
    }

    graph
}

/// Random simple biconnected graph: a Hamiltonian cycle through the `n` nodes in random order,
/// plus random chords until there are `m` edges (or the graph is complete).
///
/// For `n == 2` the graph is a single edge.
pub fn random_biconnected_graph(n: usize, m: usize, seed: usize) -> UnGraph {
    assert!(n >= 2);
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);

    let mut present = HashSet::new();
    let cycle_len = if n == 2 { 1 } else { n };
    for i in 0..cycle_len {
        let (s, t) = (order[i], order[(i + 1) % n]);
        present.insert((s.min(t), s.max(t)));
        graph.add_edge(graph.from_index(s), graph.from_index(t), EdgeLabel::Real);
    }

    let mut chords: Vec<(usize, usize)> = (0..n)
        .flat_map(|s| (s + 1..n).map(move |t| (s, t)))
        .filter(|pair| !present.contains(pair))
        .collect();
    chords.shuffle(&mut rng);

    for (s, t) in chords.into_iter().take(m.saturating_sub(cycle_len)) {
        graph.add_edge(graph.from_index(s), graph.from_index(t), EdgeLabel::Real);
    }

    graph
}

/// Random simple biconnected graph built from an open ear decomposition, usually not Hamiltonian.
///
/// Starts from a single edge, then attaches ears of up to `max_ear` new nodes between two
/// distinct existing nodes until all `n` nodes are used, then adds random chords until there
/// are `m` edges (or the graph is complete). Node ids are shuffled.
pub fn random_ear_graph(n: usize, m: usize, max_ear: usize, seed: usize) -> UnGraph {
    assert!(n >= 2 && max_ear >= 1);
    let mut rng = StdRng::seed_from_u64(seed as u64);

    let mut label: Vec<usize> = (0..n).collect();
    label.shuffle(&mut rng);

    let mut present = HashSet::new();
    let mut edges = Vec::new();
    let mut add = |s: usize, t: usize, edges: &mut Vec<(usize, usize)>| {
        present.insert((s.min(t), s.max(t)));
        edges.push((s, t));
    };

    add(0, 1, &mut edges);
    let mut used = 2;
    while used < n {
        let len = rng.random_range(1..=max_ear.min(n - used));
        let s = rng.random_range(0..used);
        let t = (s + rng.random_range(1..used)) % used;

        let mut prev = s;
        for u in used..used + len {
            add(prev, u, &mut edges);
            prev = u;
        }
        add(prev, t, &mut edges);
        used += len;
    }

    let mut chords: Vec<(usize, usize)> = (0..n)
        .flat_map(|s| (s + 1..n).map(move |t| (s, t)))
        .filter(|pair| !present.contains(pair))
        .collect();
    chords.shuffle(&mut rng);
    let missing = m.saturating_sub(edges.len());
    edges.extend(chords.into_iter().take(missing));

    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32);
    }
    for (s, t) in edges {
        graph.add_edge(
            graph.from_index(label[s]),
            graph.from_index(label[t]),
            EdgeLabel::Real,
        );
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::visit::EdgeRef;

    #[test]
    fn test_biconnected_graph_is_simple() {
        for i in 0..30 {
            let n = 2 + i / 3;
            let graph = random_biconnected_graph(n, 2 * i, i);

            let mut seen = HashSet::new();
            for e in graph.edge_references() {
                let (s, t) = (e.source().index(), e.target().index());
                assert_ne!(s, t);
                assert!(seen.insert((s.min(t), s.max(t))));
            }
            assert!(graph.edge_count() <= n * (n - 1) / 2);
            assert!(graph.edge_count() >= if n == 2 { 1 } else { n });
        }
    }

    #[test]
    fn test_ear_graph_is_simple_and_biconnected() {
        for i in 0..40 {
            let n = 2 + i / 3;
            let graph = random_ear_graph(n, n + i % 5, 1 + i % 4, i);

            let mut seen = HashSet::new();
            for e in graph.edge_references() {
                let (s, t) = (e.source().index(), e.target().index());
                assert_ne!(s, t);
                assert!(seen.insert((s.min(t), s.max(t))));
            }

            // no single node disconnects the rest
            for cut in 0..n {
                let start = (cut + 1) % n;
                let mut visited = vec![false; n];
                visited[cut] = true;
                visited[start] = true;
                let mut stack = vec![start];
                while let Some(u) = stack.pop() {
                    for w in graph.neighbors(graph.from_index(u)) {
                        if !visited[w.index()] {
                            visited[w.index()] = true;
                            stack.push(w.index());
                        }
                    }
                }
                assert!(visited.iter().all(|&x| x), "graph {i} cut at {cut}");
            }
        }
    }

    #[test]
    fn test_ear_graph_can_miss_a_hamiltonian_cycle() {
        // three one-node ears on the first edge: K2,3 plus that edge
        let non_hamiltonian = (0..200).any(|seed| {
            let graph = random_ear_graph(5, 0, 1, seed);
            let degree_two = graph
                .node_indices()
                .filter(|&u| graph.neighbors(u).count() == 2)
                .count();
            graph.edge_count() == 7 && degree_two == 3
        });
        assert!(non_hamiltonian);
    }

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = random_graph(10, 20, 7);
        let b = random_graph(10, 20, 7);
        assert_eq!(a.edge_count(), 20);
        let ends = |g: &UnGraph| -> Vec<(usize, usize)> {
            g.edge_references()
                .map(|e| (e.source().index(), e.target().index()))
                .collect()
        };
        assert_eq!(ends(&a), ends(&b));
    }
}
