use thiserror::Error;

/// Errors raised while building, querying or reading a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    #[error("Self-loop on vertex {0} is not supported")]
    SelfLoop(String),

    #[error("Edge between {0} and {1} already exists")]
    ParallelEdge(String, String),

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
