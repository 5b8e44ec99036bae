use tracing::trace;
use crate::error::GraphResult;
use crate::graph::Graph;

/// One declared connection of a graph description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub tail: String,
    pub head: String,
    pub weight: Option<i64>,
}

/// Collects a graph description (name, orientation, vertex list and connections) and turns it
/// into a [`Graph`]. Vertices are declared before any connection is resolved, so connections may
/// name vertices declared later.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    name: String,
    directed: bool,
    vertices: Vec<String>,
    connections: Vec<Connection>,
}

impl GraphBuilder {
    pub fn new(name: &str, directed: bool) -> GraphBuilder {
        GraphBuilder { name: name.to_string(), directed, ..Default::default() }
    }

    pub fn vertex(mut self, name: &str) -> GraphBuilder {
        self.add_vertex(name);
        self
    }

    pub fn edge(mut self, tail: &str, head: &str) -> GraphBuilder {
        self.add_connection(tail, head, None);
        self
    }

    pub fn weighted_edge(mut self, tail: &str, head: &str, weight: i64) -> GraphBuilder {
        self.add_connection(tail, head, Some(weight));
        self
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn add_vertex(&mut self, name: &str) {
        self.vertices.push(name.to_string());
    }

    /// Declares `name` unless it is already declared.
    pub fn ensure_vertex(&mut self, name: &str) {
        if !self.vertices.iter().any(|v| v == name) {
            self.add_vertex(name);
        }
    }

    pub fn add_connection(&mut self, tail: &str, head: &str, weight: Option<i64>) {
        self.connections.push(Connection { tail: tail.to_string(), head: head.to_string(), weight });
    }

    /// Builds the graph. Fails on duplicate vertex names, on connections naming an undeclared
    /// vertex, on self-loops and on parallel edges. A single weighted connection makes the whole
    /// graph weighted.
    pub fn build(self) -> GraphResult<Graph> {
        let mut g = Graph::new(&self.name, self.directed);
        for name in self.vertices.iter() {
            g.insert_vertex(name)?;
        }
        for c in self.connections.iter() {
            let (mut tail, mut head) = g.lookup(&c.tail, &c.head)?;
            if self.directed {
                // the feed is keyed by the tail, make it the origin
                g.resolve_direction(&c.tail, &mut head, &mut tail);
                g.link(head, tail, c.weight)?;
            } else {
                g.link(tail, head, c.weight)?;
            }
        }
        trace!(graph = g.name(), vertices = g.vertex_count(), edges = g.edge_count(), "graph built");
        Ok(g)
    }
}
