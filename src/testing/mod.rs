//! Graph generators used by the tests.

pub mod graph_enumerator;
pub mod random_graphs;
