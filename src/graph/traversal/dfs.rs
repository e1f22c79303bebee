//! Depth-first traversal engine.

use crate::{
    error::TraversalError,
    graph::{access::VisitedSet, Graph, Vertex, VertexId},
    trace::trace_event,
};

/// What to do when the walk reaches a vertex without a neighbor collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnwiredPolicy {
    Reject,
    TreatAsLeaf,
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields every vertex reachable from the start exactly once, in the order a
/// recursive pre-order walk would visit them: a vertex is marked the moment it
/// is popped, then its neighbors are pushed in reverse so the first neighbor
/// is explored first. The stack replaces recursion, so depth is bounded by
/// the number of reachable edges rather than by the call stack.
///
/// By default an unwired vertex yields [`TraversalError::UnwiredNeighbors`];
/// see [`Dfs::tolerate_unwired`]. After the first error the iterator is fused.
pub struct Dfs<'g, T> {
    graph: &'g Graph<T>,
    visited: VisitedSet,
    stack: Vec<VertexId>,
    policy: UnwiredPolicy,
    failed: bool,
}

impl<'g, T> Dfs<'g, T> {
    /// Creates a DFS from `start`. A `None` start yields nothing.
    pub fn new(graph: &'g Graph<T>, start: impl Into<Option<VertexId>>) -> Self {
        let start: Option<VertexId> = start.into();
        Self {
            graph,
            visited: VisitedSet::new(graph.vertex_count()),
            stack: start.into_iter().collect(),
            policy: UnwiredPolicy::Reject,
            failed: false,
        }
    }

    /// Treat unwired vertices as having no outgoing edges instead of failing.
    #[must_use]
    pub fn tolerate_unwired(mut self) -> Self {
        self.policy = UnwiredPolicy::TreatAsLeaf;
        self
    }

    /// Number of distinct vertices yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Like [`Iterator::next`], but also returns the vertex itself.
    pub fn next_vertex(&mut self) -> Option<Result<(VertexId, &'g Vertex<T>), TraversalError>> {
        if self.failed {
            return None;
        }
        let step = self.step();
        if matches!(step, Some(Err(_))) {
            self.failed = true;
            self.stack.clear();
        }
        step
    }

    fn step(&mut self) -> Option<Result<(VertexId, &'g Vertex<T>), TraversalError>> {
        let graph = self.graph;
        loop {
            let id = self.stack.pop()?;
            let Some(vertex) = graph.vertex(id) else {
                return Some(Err(TraversalError::UnknownVertex(id)));
            };
            if !self.visited.try_visit(id) {
                continue;
            }

            match (vertex.neighbors(), self.policy) {
                (Some(nbrs), _) => {
                    for &nbr in nbrs.iter().rev() {
                        if !graph.contains(nbr) {
                            return Some(Err(TraversalError::UnknownVertex(nbr)));
                        }
                        if !self.visited.is_visited(nbr) {
                            self.stack.push(nbr);
                        }
                    }
                }
                (None, UnwiredPolicy::TreatAsLeaf) => {}
                (None, UnwiredPolicy::Reject) => {
                    return Some(Err(TraversalError::UnwiredNeighbors(id)));
                }
            }

            trace_event!(vertex = %id, pending = self.stack.len(), "dfs visit");
            return Some(Ok((id, vertex)));
        }
    }
}

impl<T> Iterator for Dfs<'_, T> {
    type Item = Result<VertexId, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_vertex().map(|step| step.map(|(id, _)| id))
    }
}

impl<T> core::iter::FusedIterator for Dfs<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(graph: &Graph<u32>, start: usize) -> Vec<usize> {
        Dfs::new(graph, VertexId::new(start))
            .map(|step| step.map(VertexId::index))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn dfs_matches_recursive_preorder() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3 ; 3 -> (none)
        let graph = Graph::from_adjacency(vec![0, 1, 2, 3], vec![vec![1, 2], vec![3], vec![3], vec![]]);
        assert_eq!(order(&graph, 0), vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_terminates_on_cycles() {
        // 0 -> 1 -> 2 -> 0, 2 -> 2
        let graph = Graph::from_adjacency(vec![0, 1, 2], vec![vec![1], vec![2], vec![0, 2]]);
        let mut dfs = Dfs::new(&graph, VertexId::new(1));
        let ids: Vec<_> = dfs.by_ref().map(Result::unwrap).map(VertexId::index).collect();
        assert_eq!(ids, vec![1, 2, 0]);
        assert_eq!(dfs.visited_count(), 3);
    }

    #[test]
    fn none_start_yields_nothing() {
        let graph = Graph::from_adjacency(vec![0], vec![vec![]]);
        assert_eq!(Dfs::new(&graph, None).count(), 0);
    }

    #[test]
    fn unknown_start_is_reported_once() {
        let graph: Graph<u32> = Graph::new();
        let mut dfs = Dfs::new(&graph, VertexId::new(3));
        assert!(matches!(dfs.next(), Some(Err(TraversalError::UnknownVertex(id))) if id.index() == 3));
        assert!(dfs.next().is_none());
    }

    #[test]
    fn unwired_vertices_fail_unless_tolerated() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_unwired_vertex(2);
        graph.add_edge(a, b);

        let strict: Vec<_> = Dfs::new(&graph, a).collect();
        assert_eq!(strict.len(), 2);
        assert!(matches!(strict[0], Ok(id) if id == a));
        assert!(matches!(strict[1], Err(TraversalError::UnwiredNeighbors(id)) if id == b));

        let tolerant: Vec<_> = Dfs::new(&graph, a)
            .tolerate_unwired()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tolerant, vec![a, b]);
    }

    #[test]
    fn next_vertex_exposes_values() {
        let graph = Graph::from_adjacency(vec!["root", "leaf"], vec![vec![1], vec![]]);
        let mut dfs = Dfs::new(&graph, VertexId::new(0));
        let mut values = Vec::new();
        while let Some(step) = dfs.next_vertex() {
            let (_, vertex) = step.unwrap();
            values.push(*vertex.data());
        }
        assert_eq!(values, vec!["root", "leaf"]);
    }
}
