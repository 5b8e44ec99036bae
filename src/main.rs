use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use tracing::Level;
use lexgraph::{clique, dot, lexbfs, matching, chordal, Graph};

/// Chordality and maximum matching on graphs given in a DOT subset.
#[derive(Parser)]
#[command(name = "lexgraph", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read the graph from this file instead of stdin.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Log algorithm progress to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print whether the graph is chordal.
    Chordal,
    /// Print a lex-BFS elimination order, one vertex per line.
    Order,
    /// Print a maximum matching as a graph.
    Matching,
    /// Print all simplicial vertices.
    Simplicial,
}

fn read_graph(input: &Option<PathBuf>) -> Result<Graph, Box<dyn Error>> {
    let g = match input {
        Some(path) => dot::read_dot(BufReader::new(File::open(path)?))?,
        None => dot::read_dot(io::stdin().lock())?,
    };
    Ok(g)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let g = read_graph(&cli.input)?;
    match cli.command {
        Command::Chordal => println!("{}", chordal::is_chordal(&g)),
        Command::Order => {
            for v in lexbfs::lex_bfs(&g).order.iter() {
                println!("{}", g.vertex_name(*v));
            }
        }
        Command::Matching => {
            let m = matching::maximum_matching(&g)?;
            dot::write_dot(&m, &mut io::stdout().lock())?;
        }
        Command::Simplicial => {
            for v in clique::simplicial_vertices(&g) {
                println!("{}", g.vertex_name(v));
            }
        }
    }
    Ok(())
}
