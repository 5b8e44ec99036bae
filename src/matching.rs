use bit_set::BitSet;
use tracing::{debug, trace};
use crate::error::GraphResult;
use crate::graph::{EdgeId, Graph, VertexId};
use crate::visitation::{Mark, Visitation};

/// Matching under construction: which vertices and edges are covered.
#[derive(Clone, Debug)]
pub struct Cover {
    vertices: BitSet,
    edges: BitSet,
    mate: Vec<Option<EdgeId>>,
}

impl Cover {
    /// The empty matching of `g`.
    pub fn new(g: &Graph) -> Cover {
        Cover {
            vertices: BitSet::with_capacity(g.vertex_count()),
            edges: BitSet::with_capacity(g.edge_count()),
            mate: vec![None; g.vertex_count()],
        }
    }

    pub fn is_vertex_covered(&self, v: VertexId) -> bool {
        self.vertices.contains(v)
    }

    pub fn is_edge_covered(&self, e: EdgeId) -> bool {
        self.edges.contains(e)
    }

    /// The covered edge at `v`, if any.
    pub fn mate_edge(&self, v: VertexId) -> Option<EdgeId> {
        self.mate[v]
    }

    /// Number of covered edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn covered_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter()
    }

    /// Flips the covered flag of every edge on `path` and covers all of its endpoints.
    /// Applied to an augmenting path this grows the matching by one edge.
    pub fn toggle(&mut self, g: &Graph, path: &[EdgeId]) {
        for e in path.iter().cloned() {
            if !self.edges.remove(e) {
                self.edges.insert(e);
            }
            let edge = g.edge(e);
            self.vertices.insert(edge.orig);
            self.vertices.insert(edge.dst);
        }
        for e in path.iter().cloned() {
            if self.edges.contains(e) {
                let edge = g.edge(e);
                self.mate[edge.orig] = Some(e);
                self.mate[edge.dst] = Some(e);
            }
        }
    }
}

// Alternating depth-first search from `v`: leave through an uncovered edge, then either stop at an
// uncovered vertex or continue from its mate. Edges are appended on the way back, so `path` ends
// with the edge at `v`.
fn extend_path(g: &Graph, cover: &Cover, visitation: &mut Visitation, v: VertexId, path: &mut Vec<EdgeId>) -> bool {
    for e in g.incident_edges(v) {
        if cover.is_edge_covered(e) {
            continue;
        }
        let u = g.opposite(e, v);
        if visitation.mark(u) != Mark::Unmarked {
            continue;
        }
        visitation.set_mark(u, Mark::Visited);
        if !cover.is_vertex_covered(u) {
            path.push(e);
            return true;
        }
        let Some(m) = cover.mate_edge(u) else { continue };
        let w = g.opposite(m, u);
        if visitation.mark(w) != Mark::Unmarked {
            continue;
        }
        visitation.set_mark(w, Mark::Visited);
        if extend_path(g, cover, visitation, w, path) {
            path.push(m);
            path.push(e);
            return true;
        }
    }
    false
}

/// Searches an augmenting path starting at the first uncovered, unvisited vertex that has one.
///
/// Vertices explored by failed attempts stay marked, later attempts skip them. If no path is found
/// the vertex marks are cleared before returning `None`; after a success the caller has to clear
/// them since the matching is about to change.
///
/// The search has no blossom handling and is only exact on bipartite graphs.
pub fn find_augmenting_path(g: &Graph, cover: &Cover, visitation: &mut Visitation) -> Option<Vec<EdgeId>> {
    for v in g.vertices() {
        if cover.is_vertex_covered(v) || visitation.mark(v) != Mark::Unmarked {
            continue;
        }
        visitation.set_mark(v, Mark::Visited);
        let mut path = Vec::new();
        if extend_path(g, cover, visitation, v, &mut path) {
            trace!(start = g.vertex_name(v), length = path.len(), "augmenting path found");
            return Some(path);
        }
    }
    visitation.reset_vertices();
    None
}

/// Grows a matching of `g` along augmenting paths until none is left.
pub fn maximum_cover(g: &Graph) -> Cover {
    let mut cover = Cover::new(g);
    let mut visitation = Visitation::new(g);
    while let Some(path) = find_augmenting_path(g, &cover, &mut visitation) {
        cover.toggle(g, &path);
        visitation.reset_vertices();
    }
    debug!(graph = g.name(), size = cover.size(), "maximum matching found");
    cover
}

/// Returns the maximum matching of `g` as a new graph with the same name and vertices, holding
/// the matched edges. Edge weights are carried over.
pub fn maximum_matching(g: &Graph) -> GraphResult<Graph> {
    let cover = maximum_cover(g);
    let mut matching = Graph::new(g.name(), g.is_directed());
    for v in g.vertices() {
        matching.insert_vertex(g.vertex_name(v))?;
    }
    for e in g.walk_edges() {
        if !cover.is_edge_covered(e) {
            continue;
        }
        let edge = g.edge(e);
        let (orig, dst) = (g.vertex_name(edge.orig), g.vertex_name(edge.dst));
        if edge.is_weighted() {
            matching.insert_weighted_edge(orig, dst, edge.weight())?;
        } else {
            matching.insert_edge(orig, dst)?;
        }
    }
    Ok(matching)
}
