use tracing::{debug, warn};
use crate::graph::{Graph, VertexId};
use crate::lexbfs::lex_bfs_with;
use crate::visitation::{Mark, Visitation};

/// Returns true if `order` is a perfect elimination order of `g`, i.e. the later neighbors of
/// every vertex form a clique. Runs in O(|V| + |E|).
///
/// For each vertex `v` let `R(v)` be its neighbors placed after it and `p(v)` the first of them.
/// It suffices to check `R(v) \ {p(v)} ⊆ R(p(v))` for every `v`. The checks are grouped by
/// `p(v)` so that each `R(u)` is stamped only once.
///
/// A sequence that is not a permutation of the vertices of `g` is rejected.
/// `visitation` is used as scratch space and handed back cleared.
pub fn is_perfect_elimination_order<I>(order: I, g: &Graph, visitation: &mut Visitation) -> bool
where
    I: IntoIterator<Item = VertexId>,
{
    let n = g.vertex_count();
    let order: Vec<VertexId> = order.into_iter().collect();
    if order.len() != n {
        warn!(expected = n, got = order.len(), "elimination order has wrong length");
        return false;
    }
    let mut position = vec![usize::MAX; n];
    for (i, v) in order.iter().cloned().enumerate() {
        if v >= n || position[v] != usize::MAX {
            warn!(vertex = v, "elimination order is not a permutation");
            return false;
        }
        position[v] = i;
    }

    // later neighbors: everything not yet marked when v is reached
    let mut right: Vec<Vec<VertexId>> = vec![Vec::new(); n];
    for v in order.iter().cloned() {
        visitation.set_mark(v, Mark::Visited);
        for u in g.neighbors(v) {
            if visitation.mark(u) == Mark::Unmarked {
                right[v].push(u);
            }
        }
    }
    visitation.reset_vertices();

    let mut pending: Vec<Vec<VertexId>> = vec![Vec::new(); n];
    for v in order.iter().cloned() {
        if let Some(p) = right[v].iter().cloned().min_by_key(|u| position[*u]) {
            pending[p].push(v);
        }
    }

    let mut stamp = vec![usize::MAX; n];
    for u in order.iter().cloned() {
        if pending[u].is_empty() {
            continue;
        }
        for w in right[u].iter().cloned() {
            stamp[w] = u;
        }
        for v in pending[u].iter().cloned() {
            if right[v].iter().any(|w| *w != u && stamp[*w] != u) {
                debug!(vertex = g.vertex_name(v), "later neighbors do not form a clique");
                return false;
            }
        }
    }
    true
}

/// Decides whether every cycle of length at least four in `g` has a chord.
pub fn is_chordal(g: &Graph) -> bool {
    let mut visitation = Visitation::new(g);
    is_chordal_with(g, &mut visitation)
}

/// Like [`is_chordal`], reusing `visitation`. Lex-BFS only proposes an order; the elimination
/// order check decides.
pub fn is_chordal_with(g: &Graph, visitation: &mut Visitation) -> bool {
    let lex = lex_bfs_with(g, visitation);
    let chordal = is_perfect_elimination_order(lex.order.iter().copied(), g, visitation);
    debug!(graph = g.name(), chordal, "chordality decided");
    chordal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::new("t", false);
        for i in 0..n {
            g.insert_vertex(&i.to_string()).unwrap();
        }
        for (a, b) in edges {
            g.insert_edge(&a.to_string(), &b.to_string()).unwrap();
        }
        g
    }

    #[test]
    fn square_without_chord() {
        let g = build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(!is_chordal(&g));
    }

    #[test]
    fn square_with_chord() {
        let g = build(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        assert!(is_chordal(&g));
    }

    #[test]
    fn small_graphs_are_chordal() {
        assert!(is_chordal(&build(0, &[])));
        assert!(is_chordal(&build(1, &[])));
        assert!(is_chordal(&build(3, &[(0, 1), (1, 2), (0, 2)])));
    }

    #[test]
    fn pentagon_with_one_chord_is_not_chordal() {
        let g = build(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)]);
        assert!(!is_chordal(&g));
    }

    #[test]
    fn checks_given_order() {
        let g = build(3, &[(0, 1), (1, 2)]);
        let mut vis = Visitation::new(&g);
        assert!(is_perfect_elimination_order([0, 1, 2], &g, &mut vis));
        // the middle vertex first: its later neighbors 0 and 2 are not adjacent
        assert!(!is_perfect_elimination_order([1, 0, 2], &g, &mut vis));
        assert!(vis.is_clear());
    }

    #[test]
    fn rejects_non_permutations() {
        let g = build(3, &[(0, 1), (1, 2)]);
        let mut vis = Visitation::new(&g);
        assert!(!is_perfect_elimination_order([0, 1], &g, &mut vis));
        assert!(!is_perfect_elimination_order([0, 1, 1], &g, &mut vis));
        assert!(!is_perfect_elimination_order([0, 1, 7], &g, &mut vis));
    }
}
