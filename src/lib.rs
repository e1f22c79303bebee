//! # `vertex-walk` - Cycle-Safe Depth-First Traversals
//!
//! A small toolkit of depth-first traversals over a directed, possibly cyclic
//! graph of labeled vertices. Starting from one vertex it answers:
//!
//! - which values are reachable ([`print_vertex_vals`], [`write_vertex_vals`])
//! - which vertices are reachable ([`reachable`])
//! - the largest reachable value ([`max`])
//! - which reachable vertices have no outgoing edges ([`leaves`])
//! - whether a strictly value-increasing path leads to another vertex
//!   ([`has_strictly_increasing_path`])
//!
//! ## Guarantees
//!
//! - **Termination**: every traversal owns a visited set keyed by vertex
//!   identity, so self-loops, cycles and shared sub-paths are processed once.
//! - **Identity, not value**: vertices are addressed by [`VertexId`]; equal
//!   values never collapse into one vertex.
//! - **No recursion**: the [`Dfs`] engine keeps an explicit stack, so deep
//!   chains cannot exhaust the call stack. Visit order is still recursive
//!   pre-order.
//! - **Read-only**: traversals borrow the [`Graph`] shared and never mutate it.
//!
//! ## Example
//!
//! ```rust
//! use vertex_walk::{has_strictly_increasing_path, max, reachable, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex(5);
//! let b = graph.add_vertex(9);
//! let c = graph.add_vertex(2);
//! graph.add_edge(a, b);
//! graph.add_edge(b, c);
//! graph.add_edge(c, a);
//!
//! assert_eq!(reachable(&graph, a).unwrap().len(), 3);
//! assert_eq!(max(&graph, a).unwrap(), 9);
//! assert!(has_strictly_increasing_path(&graph, a, b).unwrap());
//! assert!(!has_strictly_increasing_path(&graph, a, c).unwrap());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug`/`trace` events and spans for every traversal.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod error;
pub mod graph;

pub use error::{Endpoint, TraversalError};
pub use graph::{
    has_strictly_increasing_path, leaves, max, print_vertex_vals, reachable, write_vertex_vals, Dfs,
    Graph, Vertex, VertexId,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `VertexId` is `repr(transparent)` over its index.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VertexId>>() <= mem::size_of::<usize>() * 2);

    // An unwired vertex costs no more than a wired one.
    assert!(mem::size_of::<Vertex<u64>>() == mem::size_of::<u64>() + mem::size_of::<Vec<VertexId>>());
};
