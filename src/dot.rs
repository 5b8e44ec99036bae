use std::io::{self, BufRead, Write};
use tracing::warn;
use crate::builder::GraphBuilder;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

// Reading and writing graphs in a small subset of the DOT language:
//
//   strict graph "name" {
//       "a"
//       "b"
//       "a" -- "b" [weight=3]
//   }
//
// One statement per line, `digraph` and `->` for directed graphs.

/// Writes `g` as a DOT description. Each edge is written once, with its weight if the graph is
/// weighted.
pub fn write_dot<W: Write>(g: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out, "strict {}graph \"{}\" {{", if g.is_directed() { "di" } else { "" }, escape(g.name()))?;
    writeln!(out)?;
    for v in g.vertices() {
        writeln!(out, "    \"{}\"", escape(g.vertex_name(v)))?;
    }
    writeln!(out)?;
    let arrow = if g.is_directed() { "->" } else { "--" };
    for e in g.walk_edges() {
        let edge = g.edge(e);
        write!(out, "    \"{}\" {} \"{}\"", escape(g.vertex_name(edge.orig)), arrow, escape(g.vertex_name(edge.dst)))?;
        if g.is_weighted() {
            write!(out, " [weight={}]", edge.weight())?;
        }
        writeln!(out)?;
    }
    writeln!(out, "}}")
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Word(String),
    Quoted(String),
    Edge { directed: bool },
    Open,
    Close,
    LBracket,
    RBracket,
    Equals,
    Comma,
    Semi,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

fn tokenize(line: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '{' | '}' | '[' | ']' | '=' | ',' | ';' => {
                chars.next();
                tokens.push(match c {
                    '{' => Token::Open,
                    '}' => Token::Close,
                    '[' => Token::LBracket,
                    ']' => Token::RBracket,
                    '=' => Token::Equals,
                    ',' => Token::Comma,
                    _ => Token::Semi,
                });
            }
            '-' => {
                chars.next();
                match chars.peek() {
                    Some('-') => {
                        chars.next();
                        tokens.push(Token::Edge { directed: false });
                    }
                    Some('>') => {
                        chars.next();
                        tokens.push(Token::Edge { directed: true });
                    }
                    Some(d) if d.is_ascii_digit() => {
                        let mut word = String::from("-");
                        while let Some(&d) = chars.peek() {
                            if !is_word_char(d) {
                                break;
                            }
                            word.push(d);
                            chars.next();
                        }
                        tokens.push(Token::Word(word));
                    }
                    _ => return Err("stray '-'".to_string()),
                }
            }
            '"' => {
                chars.next();
                let mut s = String::new();
                loop {
                    match chars.next() {
                        None => return Err("unterminated string".to_string()),
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => s.push(escaped),
                            None => return Err("unterminated string".to_string()),
                        },
                        Some(other) => s.push(other),
                    }
                }
                tokens.push(Token::Quoted(s));
            }
            '/' => {
                chars.next();
                if chars.peek() == Some(&'/') {
                    break; // trailing comment
                }
                return Err("stray '/'".to_string());
            }
            c if is_word_char(c) => {
                let mut word = String::new();
                while let Some(&d) = chars.peek() {
                    if !is_word_char(d) {
                        break;
                    }
                    word.push(d);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
            _ => return Err(format!("unexpected character '{}'", c)),
        }
    }
    Ok(tokens)
}

fn ident(token: &Token) -> Option<&str> {
    match token {
        Token::Word(s) | Token::Quoted(s) => Some(s),
        _ => None,
    }
}

fn parse_header(tokens: &[Token]) -> Result<GraphBuilder, String> {
    let tokens = match tokens {
        [Token::Word(strict), rest @ ..] if strict == "strict" => rest,
        _ => tokens,
    };
    let (directed, rest) = match tokens {
        [Token::Word(kind), rest @ ..] if kind == "graph" => (false, rest),
        [Token::Word(kind), rest @ ..] if kind == "digraph" => (true, rest),
        _ => return Err("expected 'graph' or 'digraph'".to_string()),
    };
    match rest {
        [Token::Open] => Ok(GraphBuilder::new("", directed)),
        [name, Token::Open] => match ident(name) {
            Some(name) => Ok(GraphBuilder::new(name, directed)),
            None => Err("expected graph name".to_string()),
        },
        _ => Err("expected '{' after graph header".to_string()),
    }
}

// Returns the weight attribute of an attribute list, other attributes are ignored.
fn parse_attributes(tokens: &[Token]) -> Result<Option<i64>, String> {
    let tokens = match tokens {
        [rest @ .., Token::Semi] => rest,
        _ => tokens,
    };
    match tokens {
        [] => Ok(None),
        [Token::LBracket, inner @ .., Token::RBracket] => {
            let mut weight = None;
            for attribute in inner.split(|t| *t == Token::Comma || *t == Token::Semi) {
                match attribute {
                    [] => {}
                    [key, Token::Equals, value] => {
                        if ident(key) == Some("weight") {
                            let value = ident(value).ok_or("expected weight value")?;
                            weight = Some(value.parse::<i64>().map_err(|e| format!("bad weight '{}': {}", value, e))?);
                        }
                    }
                    _ => return Err("malformed attribute".to_string()),
                }
            }
            Ok(weight)
        }
        _ => Err("expected attribute list".to_string()),
    }
}

/// Reads a graph description written by [`write_dot`] or by hand in the same subset.
///
/// Vertices referenced by an edge are declared implicitly. Blank lines and lines starting with
/// `//` or `#` are skipped.
pub fn read_dot<R: BufRead>(input: R) -> GraphResult<Graph> {
    let mut builder: Option<GraphBuilder> = None;
    let mut closed = false;
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#') {
            continue;
        }
        let parse_error = |message: String| {
            warn!(line = i + 1, %message, "malformed graph description");
            GraphError::Parse { line: i + 1, message }
        };
        let tokens = tokenize(trimmed).map_err(parse_error)?;
        if tokens.is_empty() {
            continue;
        }
        if closed {
            return Err(parse_error("statement after closing '}'".to_string()));
        }
        if builder.is_none() {
            builder = Some(parse_header(&tokens).map_err(parse_error)?);
            continue;
        }
        let Some(b) = builder.as_mut() else { continue };
        match tokens.as_slice() {
            [Token::Close] => closed = true,
            [a, Token::Edge { directed }, h, rest @ ..] => {
                let (Some(tail), Some(head)) = (ident(a), ident(h)) else {
                    return Err(parse_error("expected vertex names around edge".to_string()));
                };
                if *directed != b.is_directed() {
                    return Err(parse_error("edge operator does not match graph kind".to_string()));
                }
                let weight = parse_attributes(rest).map_err(parse_error)?;
                b.ensure_vertex(tail);
                b.ensure_vertex(head);
                b.add_connection(tail, head, weight);
            }
            [v, rest @ ..] if ident(v).is_some() => {
                parse_attributes(rest).map_err(parse_error)?;
                if let Some(name) = ident(v) {
                    b.ensure_vertex(name);
                }
            }
            _ => return Err(parse_error("unrecognized statement".to_string())),
        }
    }
    match builder {
        None => Err(GraphError::Parse { line: 0, message: "no graph found".to_string() }),
        Some(_) if !closed => Err(GraphError::Parse { line: 0, message: "missing closing '}'".to_string() }),
        Some(b) => b.build(),
    }
}
