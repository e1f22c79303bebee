//! Vertices and the graph that owns them.
//!
//! A [`Graph`] stores its vertices in one contiguous vector and hands out
//! [`VertexId`] handles. The handle *is* the vertex identity: two vertices
//! carrying equal values are still distinct, which is what the visited sets in
//! [`crate::graph::traversal`] key on.
//!
//! The construction surface is add-only. Traversals borrow the graph shared,
//! so it cannot change underneath a running walk.

use core::fmt;

/// A strongly-typed handle to a vertex of a specific [`Graph`].
///
/// Ids are dense indices in insertion order. An id is only meaningful for the
/// graph that issued it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Returns the dense index of this vertex.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A graph node: one value plus its outgoing edges.
///
/// The neighbor collection is optional. `Some(&[])` is a leaf; `None` marks an
/// *unwired* vertex whose edges were never supplied. Most traversals reject
/// unwired vertices, see [`TraversalError::UnwiredNeighbors`](crate::TraversalError::UnwiredNeighbors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    data: T,
    neighbors: Option<Vec<VertexId>>,
}

impl<T> Vertex<T> {
    /// The value carried by this vertex.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Outgoing edges in insertion order, or `None` if the vertex is unwired.
    #[inline]
    pub fn neighbors(&self) -> Option<&[VertexId]> {
        self.neighbors.as_deref()
    }

    /// Whether the vertex has a neighbor collection (possibly empty).
    #[inline]
    pub fn is_wired(&self) -> bool {
        self.neighbors.is_some()
    }
}

/// A directed, possibly cyclic graph of labeled vertices.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to the vertex vector |
/// | `add_edge` | \(O(1)\) amortized | Appends to the source's neighbor list |
/// | `vertex` | \(O(1)\) | Index lookup |
/// | `edge_count` | \(O(n)\) | Sums neighbor list lengths |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
        }
    }

    /// Creates a graph from parallel value and adjacency vectors.
    ///
    /// Vertex `i` carries `values[i]` and has edges to `adjacency[i]`. Every
    /// vertex is wired, so an empty inner vector makes a leaf.
    ///
    /// # Panics
    /// Panics if the vectors differ in length or any neighbor index is out of bounds.
    pub fn from_adjacency(values: Vec<T>, adjacency: Vec<Vec<usize>>) -> Self {
        let vertex_count = values.len();
        assert_eq!(
            adjacency.len(),
            vertex_count,
            "adjacency has {} lists for {vertex_count} values",
            adjacency.len()
        );
        for (u, nbrs) in adjacency.iter().enumerate() {
            for &v in nbrs {
                assert!(v < vertex_count, "edge {u}->{v} out of bounds for n={vertex_count}");
            }
        }

        let vertices = values
            .into_iter()
            .zip(adjacency)
            .map(|(data, nbrs)| Vertex {
                data,
                neighbors: Some(nbrs.into_iter().map(VertexId::new).collect()),
            })
            .collect();

        Self { vertices }
    }

    /// Adds a vertex with an empty neighbor collection.
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        self.push(data, Some(Vec::new()))
    }

    /// Adds a vertex without a neighbor collection.
    ///
    /// Only [`print_vertex_vals`](crate::print_vertex_vals) and the tolerant
    /// [`Dfs`](crate::Dfs) accept such a vertex as "no outgoing edges".
    pub fn add_unwired_vertex(&mut self, data: T) -> VertexId {
        self.push(data, None)
    }

    fn push(&mut self, data: T, neighbors: Option<Vec<VertexId>>) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex { data, neighbors });
        id
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// Parallel edges and self-loops are kept as given. Adding an edge out of
    /// an unwired vertex gives it a neighbor collection.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        assert!(to.index() < self.vertex_count(), "to vertex {to} out of bounds");
        let vertex_count = self.vertex_count();
        let Some(source) = self.vertices.get_mut(from.index()) else {
            panic!("from vertex {from} out of bounds for n={vertex_count}");
        };
        source.neighbors.get_or_insert_with(Vec::new).push(to);
    }

    /// Returns the vertex behind `id`, if it belongs to this graph.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    /// Returns the value of the vertex behind `id`.
    #[inline]
    pub fn data(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::data)
    }

    /// Returns whether `id` names a vertex of this graph.
    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of directed edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.vertices
            .iter()
            .filter_map(Vertex::neighbors)
            .map(<[VertexId]>::len)
            .sum()
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
