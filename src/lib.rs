// #![warn(missing_docs)]

//! # spqr_trees
//!
//! A Rust library for learning what are SPQR trees,
//! how are they built and how can be used.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! The triconnected components are found with the path search of Hopcroft and Tarjan,
//! as corrected by Gutwenger and Mutzel, in linear time and without recursion.
//!
//! ```
//! use spqr_trees::{input::from_str, triconnected::get_triconnected_components};
//!
//! // a square with one diagonal: two triangles glued along 0 - 2
//! let graph = from_str("0,1\n1,2\n2,3\n3,0\n0,2\n").unwrap();
//! let tricon = get_triconnected_components(&graph);
//! assert_eq!(tricon.count_by_type(), [1, 2, 0]);
//! ```

pub mod debugging;
pub mod error;
pub mod input;
pub mod spqr_blocks;
pub mod spqr_tree;
pub mod testing;
pub mod triconnected;
pub mod triconnected_blocks;
pub mod types;

pub use error::DecompositionError;
pub use types::EdgeLabel;
pub use types::TriconnectivityConfig;
pub use types::UnGraph;
