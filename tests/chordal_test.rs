use lexgraph::chordal::{is_chordal, is_chordal_with};
use lexgraph::lexbfs::lex_bfs;
use lexgraph::{Graph, Visitation};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// Vertices are named by their index but inserted in shuffled order, so that the traversal order of
// the algorithms differs from the numbering used to generate the edges.
fn shuffled_graph(rng: &mut StdRng, n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new("random", false);
    let mut names: Vec<usize> = (0..n).collect();
    names.shuffle(rng);
    for v in names {
        g.insert_vertex(&v.to_string()).unwrap();
    }
    for (a, b) in edges {
        g.insert_edge(&a.to_string(), &b.to_string()).unwrap();
    }
    g
}

fn random_tree(rng: &mut StdRng, n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|v| (rng.gen_range(0..v), v)).collect()
}

// Every k-tree is chordal: start from a (k+1)-clique and repeatedly attach a new vertex to an
// existing k-clique.
fn random_ktree(rng: &mut StdRng, n: usize, k: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    let mut cliques: Vec<Vec<usize>> = Vec::new();
    for i in 0..=k {
        for j in i + 1..=k {
            edges.push((i, j));
        }
        cliques.push((0..=k).filter(|x| *x != i).collect());
    }
    for v in k + 1..n {
        let base = cliques[rng.gen_range(0..cliques.len())].clone();
        for u in base.iter() {
            edges.push((*u, v));
        }
        for skip in 0..k {
            let mut c: Vec<usize> = base.iter().enumerate().filter(|(i, _)| *i != skip).map(|(_, u)| *u).collect();
            c.push(v);
            cliques.push(c);
        }
    }
    edges
}

fn cycle(offset: usize, len: usize) -> Vec<(usize, usize)> {
    (0..len).map(|i| (offset + i, offset + (i + 1) % len)).collect()
}

#[test]
fn trees_are_chordal() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in 1..40 {
        let edges = random_tree(&mut rng, n);
        let g = shuffled_graph(&mut rng, n, &edges);
        assert!(is_chordal(&g), "tree with {} vertices", n);
    }
}

#[test]
fn ktrees_are_chordal() {
    let mut rng = StdRng::seed_from_u64(2);
    for k in 1..5 {
        for n in k + 1..30 {
            let edges = random_ktree(&mut rng, n, k);
            let g = shuffled_graph(&mut rng, n, &edges);
            assert!(is_chordal(&g), "{}-tree with {} vertices", k, n);
        }
    }
}

#[test]
fn chordless_cycles_are_not_chordal() {
    let mut rng = StdRng::seed_from_u64(3);
    for len in 4..20 {
        let g = shuffled_graph(&mut rng, len, &cycle(0, len));
        assert!(!is_chordal(&g), "cycle of length {}", len);
    }
    assert!(is_chordal(&shuffled_graph(&mut rng, 3, &cycle(0, 3))));
}

#[test]
fn chordless_cycle_in_another_component() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut edges = random_ktree(&mut rng, 12, 2);
    edges.extend(cycle(12, 5));
    let g = shuffled_graph(&mut rng, 17, &edges);
    assert!(!is_chordal(&g));
}

#[test]
fn square_without_chord() {
    let mut g = Graph::new("square", false);
    for name in ["A", "B", "C", "D"] {
        g.insert_vertex(name).unwrap();
    }
    for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")] {
        g.insert_edge(a, b).unwrap();
    }
    assert!(!is_chordal(&g));
}

#[test]
fn repeated_checks_agree_and_leave_no_marks() {
    let mut rng = StdRng::seed_from_u64(5);
    for round in 0..20 {
        let n = 12;
        let edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .filter(|_| rng.gen_bool(0.3))
            .collect();
        let g = shuffled_graph(&mut rng, n, &edges);
        let mut vis = Visitation::new(&g);
        let first = is_chordal_with(&g, &mut vis);
        assert!(vis.is_clear(), "round {}", round);
        let second = is_chordal_with(&g, &mut vis);
        assert!(vis.is_clear(), "round {}", round);
        assert_eq!(first, second);
    }
}

#[test]
fn lex_bfs_orders_every_vertex_once() {
    let mut rng = StdRng::seed_from_u64(6);
    for n in 0..30 {
        let edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
            .filter(|_| rng.gen_bool(0.1))
            .collect();
        let g = shuffled_graph(&mut rng, n, &edges);
        let mut order = lex_bfs(&g).to_vec();
        assert_eq!(order.len(), g.vertex_count());
        order.sort();
        assert_eq!(order, (0..n).collect::<Vec<_>>());
    }
}
