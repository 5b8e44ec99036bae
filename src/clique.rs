use itertools::Itertools;
use crate::graph::{Graph, VertexId};

/// Returns true if every pair of `vertices` is adjacent in `g`.
/// The empty set and single vertices are cliques.
pub fn is_clique(g: &Graph, vertices: &[VertexId]) -> bool {
    vertices.iter().tuple_combinations().all(|(a, b)| g.adjacent(*a, *b))
}

/// A vertex is simplicial if its neighborhood is a clique.
pub fn is_simplicial(g: &Graph, v: VertexId) -> bool {
    is_clique(g, &g.neighbors(v).collect_vec())
}

/// All simplicial vertices of `g` in vertex order.
pub fn simplicial_vertices(g: &Graph) -> Vec<VertexId> {
    g.vertices().filter(|v| is_simplicial(g, *v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 - 1
    // | / |
    // 2 - 3
    fn diamond() -> Graph {
        let mut g = Graph::new("diamond", false);
        for name in ["0", "1", "2", "3"] {
            g.insert_vertex(name).unwrap();
        }
        for (a, b) in [("0", "1"), ("0", "2"), ("1", "2"), ("1", "3"), ("2", "3")] {
            g.insert_edge(a, b).unwrap();
        }
        g
    }

    #[test]
    fn trivial_cliques() {
        let g = diamond();
        assert!(is_clique(&g, &[]));
        assert!(is_clique(&g, &[3]));
    }

    #[test]
    fn pairs_follow_adjacency() {
        let g = diamond();
        assert!(is_clique(&g, &[0, 1]));
        assert!(!is_clique(&g, &[0, 3]));
        assert!(is_clique(&g, &[0, 1, 2]));
        assert!(!is_clique(&g, &[0, 1, 2, 3]));
    }

    #[test]
    fn simplicial() {
        let g = diamond();
        assert!(is_simplicial(&g, 0));
        assert!(!is_simplicial(&g, 1));
        assert_eq!(simplicial_vertices(&g), vec![0, 3]);
    }
}
