//! The five depth-first traversals.
//!
//! Every operation takes the graph by shared reference, allocates its own
//! visited set, and walks each reachable vertex at most once. A `None` start
//! is a valid, empty input everywhere except
//! [`has_strictly_increasing_path`], where it is a caller error.
//!
//! | Operation | `None` start | Unwired vertex |
//! |-----------|--------------|----------------|
//! | [`print_vertex_vals`] / [`write_vertex_vals`] | writes nothing | no outgoing edges |
//! | [`reachable`] | empty set | error |
//! | [`max`] | `T::min_value()` | error |
//! | [`leaves`] | empty set | error, never a leaf |
//! | [`has_strictly_increasing_path`] | error | error if it must be expanded |

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{self, Write};

use num_traits::Bounded;

use crate::{
    error::{Endpoint, TraversalError},
    graph::{access::VisitedSet, Graph, VertexId},
    trace::{debug_event, trace_event},
};

mod dfs;

pub use dfs::Dfs;

/// Prints the value of every vertex reachable from `vertex` to standard output,
/// one per line.
///
/// Unwired vertices are treated as having no outgoing edges. A `None` start
/// prints nothing.
///
/// # Errors
/// Returns [`TraversalError::UnknownVertex`] if `vertex` is not in `graph`, or
/// [`TraversalError::Io`] if standard output cannot be written.
pub fn print_vertex_vals<T: Display>(
    graph: &Graph<T>,
    vertex: impl Into<Option<VertexId>>,
) -> Result<(), TraversalError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_vertex_vals(graph, vertex, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Writes the value of every vertex reachable from `vertex` to `out`, one per line.
///
/// Values appear in depth-first pre-order, each exactly once.
///
/// # Errors
/// See [`print_vertex_vals`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn write_vertex_vals<T: Display, W: Write>(
    graph: &Graph<T>,
    vertex: impl Into<Option<VertexId>>,
    out: &mut W,
) -> Result<(), TraversalError> {
    let mut dfs = Dfs::new(graph, vertex).tolerate_unwired();
    while let Some(step) = dfs.next_vertex() {
        let (_, v) = step?;
        writeln!(out, "{}", v.data())?;
    }
    debug_event!(written = dfs.visited_count(), "wrote vertex values");
    Ok(())
}

/// Returns every vertex reachable from `vertex`, including `vertex` itself.
///
/// # Errors
/// Returns [`TraversalError::UnwiredNeighbors`] if the walk reaches an unwired
/// vertex, or [`TraversalError::UnknownVertex`] if `vertex` is not in `graph`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn reachable<T>(
    graph: &Graph<T>,
    vertex: impl Into<Option<VertexId>>,
) -> Result<HashSet<VertexId>, TraversalError> {
    let found = Dfs::new(graph, vertex).collect::<Result<HashSet<_>, _>>()?;
    debug_event!(reachable = found.len(), "collected reachable vertices");
    Ok(found)
}

/// Returns the largest value among the vertices reachable from `vertex`.
///
/// A `None` start returns `T::min_value()`, e.g. `i32::MIN`.
///
/// # Errors
/// Same as [`reachable`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn max<T>(graph: &Graph<T>, vertex: impl Into<Option<VertexId>>) -> Result<T, TraversalError>
where
    T: Ord + Copy + Bounded,
{
    let mut best = T::min_value();
    let mut dfs = Dfs::new(graph, vertex);
    while let Some(step) = dfs.next_vertex() {
        let (_, v) = step?;
        best = best.max(*v.data());
    }
    Ok(best)
}

/// Returns every reachable vertex whose neighbor collection is present and empty.
///
/// The start vertex is included when it is itself a leaf.
///
/// # Errors
/// Same as [`reachable`]. An unwired vertex is reported as an error rather
/// than counted as a leaf.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn leaves<T>(
    graph: &Graph<T>,
    vertex: impl Into<Option<VertexId>>,
) -> Result<HashSet<VertexId>, TraversalError> {
    let mut found = HashSet::new();
    let mut dfs = Dfs::new(graph, vertex);
    while let Some(step) = dfs.next_vertex() {
        let (id, v) = step?;
        if v.neighbors().is_some_and(<[VertexId]>::is_empty) {
            found.insert(id);
        }
    }
    debug_event!(visited = dfs.visited_count(), leaves = found.len(), "collected leaves");
    Ok(found)
}

/// Returns whether `end` can be reached from `start` along edges whose target
/// value is strictly greater than their source value.
///
/// A vertex always has such a path to itself.
///
/// # Errors
/// Returns [`TraversalError::MissingEndpoint`] if either endpoint is `None`,
/// checked before anything else. Returns [`TraversalError::UnknownVertex`] for
/// ids outside `graph`, and [`TraversalError::UnwiredNeighbors`] if a vertex
/// that must be expanded is unwired.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn has_strictly_increasing_path<T: Ord>(
    graph: &Graph<T>,
    start: impl Into<Option<VertexId>>,
    end: impl Into<Option<VertexId>>,
) -> Result<bool, TraversalError> {
    let (start, end): (Option<VertexId>, Option<VertexId>) = (start.into(), end.into());
    let start = start.ok_or(TraversalError::MissingEndpoint(Endpoint::Start))?;
    let end = end.ok_or(TraversalError::MissingEndpoint(Endpoint::End))?;
    if !graph.contains(end) {
        return Err(TraversalError::UnknownVertex(end));
    }

    let mut visited = VisitedSet::new(graph.vertex_count());
    let mut stack = vec![start];

    while let Some(id) = stack.pop() {
        let vertex = graph.vertex(id).ok_or(TraversalError::UnknownVertex(id))?;
        if !visited.try_visit(id) {
            continue;
        }
        if id == end {
            debug_event!(visited = visited.len(), "increasing path found");
            return Ok(true);
        }

        let nbrs = vertex
            .neighbors()
            .ok_or(TraversalError::UnwiredNeighbors(id))?;
        for &nbr in nbrs.iter().rev() {
            let Some(next) = graph.vertex(nbr) else {
                return Err(TraversalError::UnknownVertex(nbr));
            };
            if next.data() > vertex.data() && !visited.is_visited(nbr) {
                trace_event!(from = %id, to = %nbr, "increasing edge");
                stack.push(nbr);
            }
        }
    }

    debug_event!(visited = visited.len(), "no increasing path");
    Ok(false)
}
