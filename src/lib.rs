pub mod error;
pub mod list;
pub mod label_heap;
pub mod graph;
pub mod visitation;
pub mod builder;
pub mod lexbfs;
pub mod chordal;
pub mod clique;
pub mod matching;
pub mod dot;

// Re-exports to flatten the crate.
pub use builder::GraphBuilder;
pub use chordal::{is_chordal, is_perfect_elimination_order};
pub use clique::{is_clique, is_simplicial};
pub use error::{GraphError, GraphResult};
pub use graph::{Direction, EdgeId, Graph, VertexId};
pub use lexbfs::lex_bfs;
pub use matching::maximum_matching;
pub use visitation::{Mark, Visitation};
