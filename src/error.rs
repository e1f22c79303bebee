//! Error types returned by graph traversals.

use core::fmt;
use std::io;

use crate::graph::VertexId;

/// Which endpoint of a path query was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The vertex the path starts from.
    Start,
    /// The vertex the path must reach.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// The error type for traversal failures.
///
/// Every variant describes a fault in the caller's input, except [`Io`](Self::Io),
/// which wraps a failure of the sink passed to
/// [`write_vertex_vals`](crate::write_vertex_vals).
#[derive(Debug)]
pub enum TraversalError {
    /// A required endpoint was `None`.
    MissingEndpoint(Endpoint),
    /// The id does not name a vertex of the traversed graph.
    UnknownVertex(VertexId),
    /// The vertex has no neighbor collection and the traversal needed one.
    UnwiredNeighbors(VertexId),
    /// Writing a vertex value failed.
    Io(io::Error),
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(which) => write!(f, "{which} vertex must not be None"),
            Self::UnknownVertex(id) => write!(f, "vertex {id} does not belong to this graph"),
            Self::UnwiredNeighbors(id) => write!(f, "vertex {id} has no neighbor collection"),
            Self::Io(err) => write!(f, "failed to write vertex value: {err}"),
        }
    }
}

impl std::error::Error for TraversalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TraversalError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_offending_vertex() {
        let id = VertexId::new(7);
        assert_eq!(
            TraversalError::UnwiredNeighbors(id).to_string(),
            "vertex v7 has no neighbor collection"
        );
        assert_eq!(
            TraversalError::UnknownVertex(id).to_string(),
            "vertex v7 does not belong to this graph"
        );
        assert_eq!(
            TraversalError::MissingEndpoint(Endpoint::End).to_string(),
            "end vertex must not be None"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = TraversalError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(matches!(err, TraversalError::Io(_)));
        assert!(err.source().is_some());
        assert!(TraversalError::MissingEndpoint(Endpoint::Start).source().is_none());
    }
}
