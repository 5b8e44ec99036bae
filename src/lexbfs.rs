use tracing::{debug, trace};
use crate::graph::{Graph, VertexId};
use crate::label_heap::{Label, LabelHeap};
use crate::list::OrderedList;
use crate::visitation::{Mark, Visitation};

/// Result of a lexicographic breadth-first search.
#[derive(Debug)]
pub struct LexBfs {
    /// Every vertex exactly once. The list is built by prepending, so it starts with the vertex
    /// finalized last: read front to back it is the candidate perfect elimination order.
    pub order: OrderedList<VertexId>,
    /// Final label of every vertex, indexed by vertex id.
    pub labels: Vec<Label>,
}

impl LexBfs {
    /// The elimination order as a vector.
    pub fn to_vec(&self) -> Vec<VertexId> {
        self.order.iter().copied().collect()
    }
}

/// Runs lex-BFS on `g` with fresh visitation marks.
pub fn lex_bfs(g: &Graph) -> LexBfs {
    let mut visitation = Visitation::new(g);
    lex_bfs_with(g, &mut visitation)
}

/// Runs lex-BFS on `g`, using `visitation` as scratch space. All marks are cleared on return.
///
/// A vertex leaves the heap once its label is the greatest among all seen but unfinished
/// vertices. Finalizing it appends the current rank to the labels of its unfinished neighbors;
/// ranks count down from the number of vertices, so neighbors of early vertices win.
/// The graph is traversed as undirected. When a component is exhausted the search restarts from
/// the first unmarked vertex, so the result always covers all vertices.
pub fn lex_bfs_with(g: &Graph, visitation: &mut Visitation) -> LexBfs {
    let n = g.vertex_count();
    let mut labels = vec![Label::new(); n];
    let mut order = OrderedList::new();
    let mut heap = LabelHeap::with_capacity(n);
    let mut rank = n as u32;
    let mut root = 0;

    loop {
        let v = match heap.pop(&labels) {
            Some(v) => v,
            None => {
                while root < n && visitation.mark(root) != Mark::Unmarked {
                    root += 1;
                }
                if root == n {
                    break;
                }
                trace!(root = g.vertex_name(root), "lex-bfs starts a new component");
                heap.push(root, &labels);
                visitation.set_mark(root, Mark::Visited);
                continue;
            }
        };
        // stale entry
        if visitation.mark(v) == Mark::Inserted {
            continue;
        }
        visitation.set_mark(v, Mark::Inserted);
        order.insert(v);
        for e in g.incident_edges(v) {
            if visitation.is_edge_visited(e) {
                continue;
            }
            let other = g.opposite(e, v);
            let mark = visitation.mark(other);
            if mark != Mark::Inserted {
                labels[other].push(rank);
            }
            if mark == Mark::Unmarked {
                heap.push(other, &labels);
                visitation.set_mark(other, Mark::Visited);
            }
            visitation.visit_edge(e);
        }
        // neighbor labels changed in place
        heap.heapify(&labels);
        rank -= 1;
    }

    visitation.reset_vertices();
    visitation.reset_edges();
    debug!(graph = g.name(), vertices = order.len(), "lex-bfs finished");
    LexBfs { order, labels }
}
