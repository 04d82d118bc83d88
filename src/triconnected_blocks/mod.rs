pub(crate) mod acceptable_adj;
pub(crate) mod decorations;
pub(crate) mod dfs_explorer;
pub(crate) mod graph_internal;
pub(crate) mod merge_components;
pub(crate) mod palm_dfs;
pub(crate) mod path_search;
pub(crate) mod pathfinder;
pub(crate) mod tstack;

pub mod outside_structures;
