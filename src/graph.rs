use crate::error::{GraphError, GraphResult};
use crate::list::OrderedList;
use crate::visitation::Visitation;

// This module contains the graph model.
// Vertices and edges live in flat arenas and are addressed by their index. The neighbor
// sequences of a vertex only hold edge indices, every edge is stored exactly once.

pub type VertexId = usize;
pub type EdgeId = usize;

/// Which neighbor sequence of a vertex a query refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Neighborhood of a vertex in an undirected graph.
    Undirected,
    /// In-neighborhood of a vertex in a directed graph.
    In,
    /// Out-neighborhood of a vertex in a directed graph.
    Out,
}

#[derive(Debug)]
pub struct Vertex {
    name: String,
    in_edges: OrderedList<EdgeId>,
    out_edges: OrderedList<EdgeId>,
}

impl Vertex {
    fn new(name: &str) -> Vertex {
        Vertex { name: name.to_string(), in_edges: OrderedList::new(), out_edges: OrderedList::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An edge between `orig` and `dst`. In a directed graph `orig` is the tail and `dst` the head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub orig: VertexId,
    pub dst: VertexId,
    weight: Option<i64>,
}

impl Edge {
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    /// Weight of the edge, 0 for an unweighted edge.
    pub fn weight(&self) -> i64 {
        self.weight.unwrap_or(0)
    }
}

#[derive(Debug)]
pub struct Graph {
    name: String,
    directed: bool,
    weighted: bool,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(name: &str, directed: bool) -> Graph {
        Graph { name: name.to_string(), directed, weighted: false, vertices: Vec::new(), edges: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// True as soon as one edge carries a weight.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.vertices.len()
    }

    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v]
    }

    pub fn vertex_name(&self, v: VertexId) -> &str {
        &self.vertices[v].name
    }

    pub fn edge(&self, e: EdgeId) -> &Edge {
        &self.edges[e]
    }

    pub fn find_vertex(&self, name: &str) -> GraphResult<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name == name)
            .ok_or_else(|| GraphError::VertexNotFound(name.to_string()))
    }

    /// Resolves both endpoint names of a connection in a single scan over the vertices.
    /// Returns `(tail, head)`.
    pub fn lookup(&self, tail: &str, head: &str) -> GraphResult<(VertexId, VertexId)> {
        let mut found_tail = None;
        let mut found_head = None;
        for (i, v) in self.vertices.iter().enumerate() {
            if found_tail.is_none() && v.name == tail {
                found_tail = Some(i);
            }
            if found_head.is_none() && v.name == head {
                found_head = Some(i);
            }
            if found_tail.is_some() && found_head.is_some() {
                break;
            }
        }
        let t = found_tail.ok_or_else(|| GraphError::VertexNotFound(tail.to_string()))?;
        let h = found_head.ok_or_else(|| GraphError::VertexNotFound(head.to_string()))?;
        Ok((t, h))
    }

    /// Swaps `head` and `tail` when `known` names the current tail rather than the head, so that
    /// afterwards `head` is the endpoint called `known`.
    pub fn resolve_direction(&self, known: &str, head: &mut VertexId, tail: &mut VertexId) {
        if self.vertex_name(*head) != known && self.vertex_name(*tail) == known {
            std::mem::swap(head, tail);
        }
    }

    /// Neighbor-edge sequence of `v`. Undirected graphs keep every incident edge in the out
    /// sequence.
    pub fn neighborhood(&self, v: VertexId, direction: Direction) -> &OrderedList<EdgeId> {
        match direction {
            Direction::Undirected | Direction::Out => &self.vertices[v].out_edges,
            Direction::In => &self.vertices[v].in_edges,
        }
    }

    pub fn degree(&self, v: VertexId, direction: Direction) -> usize {
        self.neighborhood(v, direction).len()
    }

    /// All edges touching `v`, ignoring orientation.
    pub fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let vertex = &self.vertices[v];
        vertex.out_edges.iter().chain(vertex.in_edges.iter()).copied()
    }

    /// The endpoint of `e` that is not `v`.
    #[inline(always)]
    pub fn opposite(&self, e: EdgeId, v: VertexId) -> VertexId {
        let edge = &self.edges[e];
        if edge.orig == v { edge.dst } else { edge.orig }
    }

    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incident_edges(v).map(move |e| self.opposite(e, v))
    }

    /// O(degree(v1)) adjacency test, ignoring orientation.
    pub fn adjacent(&self, v1: VertexId, v2: VertexId) -> bool {
        self.incident_edges(v1).any(|e| self.opposite(e, v1) == v2)
    }

    pub fn insert_vertex(&mut self, name: &str) -> GraphResult<VertexId> {
        if self.vertices.iter().any(|v| v.name == name) {
            return Err(GraphError::DuplicateVertex(name.to_string()));
        }
        self.vertices.push(Vertex::new(name));
        Ok(self.vertices.len() - 1)
    }

    pub fn insert_edge(&mut self, tail: &str, head: &str) -> GraphResult<EdgeId> {
        let (t, h) = self.lookup(tail, head)?;
        self.link(t, h, None)
    }

    pub fn insert_weighted_edge(&mut self, tail: &str, head: &str, weight: i64) -> GraphResult<EdgeId> {
        let (t, h) = self.lookup(tail, head)?;
        self.link(t, h, Some(weight))
    }

    pub(crate) fn link(&mut self, orig: VertexId, dst: VertexId, weight: Option<i64>) -> GraphResult<EdgeId> {
        if orig == dst {
            return Err(GraphError::SelfLoop(self.vertex_name(orig).to_string()));
        }
        let duplicate = if self.directed {
            self.vertices[orig].out_edges.iter().any(|e| self.edges[*e].dst == dst)
        } else {
            self.adjacent(orig, dst)
        };
        if duplicate {
            return Err(GraphError::ParallelEdge(
                self.vertex_name(orig).to_string(),
                self.vertex_name(dst).to_string(),
            ));
        }
        let e = self.edges.len();
        self.edges.push(Edge { orig, dst, weight });
        self.vertices[orig].out_edges.insert(e);
        if self.directed {
            self.vertices[dst].in_edges.insert(e);
        } else {
            self.vertices[dst].out_edges.insert(e);
        }
        if weight.is_some() {
            self.weighted = true;
        }
        Ok(e)
    }

    /// Enumerates every edge exactly once by sweeping the out sequences of all vertices in
    /// vertex order. An undirected edge is reachable from both endpoints, the edge visited flags
    /// filter the second encounter.
    pub fn walk_edges(&self) -> Vec<EdgeId> {
        let mut visitation = Visitation::new(self);
        let mut walk = Vec::with_capacity(self.edges.len());
        for v in self.vertices() {
            for e in self.neighborhood(v, Direction::Out).iter().cloned() {
                if visitation.is_edge_visited(e) {
                    continue;
                }
                visitation.visit_edge(e);
                walk.push(e);
            }
        }
        visitation.reset_edges();
        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(names: &[&str]) -> Graph {
        let mut g = Graph::new("path", false);
        for name in names {
            g.insert_vertex(name).unwrap();
        }
        for w in names.windows(2) {
            g.insert_edge(w[0], w[1]).unwrap();
        }
        g
    }

    #[test]
    fn insert_and_read_back() {
        let g = path(&["a", "b", "c"]);
        assert_eq!(g.name(), "path");
        assert!(!g.is_directed());
        assert!(!g.is_weighted());
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        let names: Vec<&str> = g.vertices().map(|v| g.vertex_name(v)).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(g.degree(1, Direction::Undirected), 2);
        assert_eq!(g.degree(0, Direction::Undirected), 1);
    }

    #[test]
    fn lookup_reports_missing_names() {
        let g = path(&["a", "b"]);
        assert_eq!(g.lookup("b", "a").unwrap(), (1, 0));
        match g.lookup("a", "z") {
            Err(GraphError::VertexNotFound(name)) => assert_eq!(name, "z"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn resolve_direction_swaps_only_on_tail_match() {
        let g = path(&["a", "b"]);
        let (mut head, mut tail) = (1, 0);
        g.resolve_direction("a", &mut head, &mut tail);
        assert_eq!((head, tail), (0, 1));
        g.resolve_direction("a", &mut head, &mut tail);
        assert_eq!((head, tail), (0, 1));
    }

    #[test]
    fn directed_neighborhoods() {
        let mut g = Graph::new("d", true);
        for name in ["a", "b", "c"] {
            g.insert_vertex(name).unwrap();
        }
        g.insert_edge("a", "b").unwrap();
        g.insert_edge("c", "b").unwrap();
        g.insert_weighted_edge("b", "a", 4).unwrap();
        assert!(g.is_weighted());
        assert_eq!(g.degree(1, Direction::In), 2);
        assert_eq!(g.degree(1, Direction::Out), 1);
        assert_eq!(g.degree(0, Direction::Out), 1);
        assert!(g.adjacent(2, 1));
        assert!(!g.adjacent(0, 2));
    }

    #[test]
    fn rejects_loops_and_parallel_edges() {
        let mut g = path(&["a", "b"]);
        assert!(matches!(g.insert_edge("a", "a"), Err(GraphError::SelfLoop(_))));
        assert!(matches!(g.insert_edge("b", "a"), Err(GraphError::ParallelEdge(_, _))));
        assert!(matches!(g.insert_vertex("a"), Err(GraphError::DuplicateVertex(_))));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn walk_edges_reports_each_edge_once() {
        let mut g = path(&["a", "b", "c", "d"]);
        g.insert_edge("d", "a").unwrap();
        let mut walk = g.walk_edges();
        assert_eq!(walk.len(), 4);
        walk.sort();
        assert_eq!(walk, vec![0, 1, 2, 3]);
    }
}
