//! Graph storage and depth-first traversals.
//!
//! - `vertex`: the [`Graph`] container, its [`Vertex`] nodes and [`VertexId`] handles
//! - `traversal`: the [`Dfs`] engine and the operations built on it

pub mod traversal;
pub mod vertex;
pub(crate) mod access;

pub use traversal::{
    has_strictly_increasing_path, leaves, max, print_vertex_vals, reachable, write_vertex_vals, Dfs,
};
pub use vertex::{Graph, Vertex, VertexId};
