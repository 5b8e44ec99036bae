use bit_set::BitSet;
use crate::graph::{EdgeId, Graph, VertexId};

/// Visitation state of a vertex during a traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Unmarked,
    /// Seen, but not finalized yet.
    Visited,
    /// Finalized, e.g. already placed into an ordering.
    Inserted,
}

/// Transient per-traversal marks for the vertices and edges of one graph.
///
/// The marks are kept apart from the graph so that a traversal only needs a shared reference to
/// the graph. Every algorithm that takes a `Visitation` hands it back cleared.
#[derive(Clone, Debug)]
pub struct Visitation {
    vertices: Vec<Mark>,
    edges: BitSet,
}

impl Visitation {
    pub fn new(g: &Graph) -> Visitation {
        Visitation { vertices: vec![Mark::Unmarked; g.vertex_count()], edges: BitSet::with_capacity(g.edge_count()) }
    }

    #[inline(always)]
    pub fn mark(&self, v: VertexId) -> Mark {
        self.vertices[v]
    }

    #[inline(always)]
    pub fn set_mark(&mut self, v: VertexId, mark: Mark) {
        self.vertices[v] = mark;
    }

    pub fn is_edge_visited(&self, e: EdgeId) -> bool {
        self.edges.contains(e)
    }

    pub fn visit_edge(&mut self, e: EdgeId) {
        self.edges.insert(e);
    }

    /// Sweeps every vertex back to `Unmarked`.
    pub fn reset_vertices(&mut self) {
        self.vertices.iter_mut().for_each(|m| *m = Mark::Unmarked);
    }

    /// Sweeps every edge back to unvisited.
    pub fn reset_edges(&mut self) {
        self.edges.clear();
    }

    /// True if no vertex and no edge carries a mark.
    pub fn is_clear(&self) -> bool {
        self.edges.is_empty() && self.vertices.iter().all(|m| *m == Mark::Unmarked)
    }
}
